// Domain Layer - Pure business logic and entities

pub mod error;
pub mod message;
pub mod run;

// Re-exports
pub use error::{DomainError, Result as DomainResult};
pub use message::{Message, MessageId};
pub use run::{RunPhase, RunReport};
