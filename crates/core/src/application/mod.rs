// Application Layer - Use Cases and Orchestration

pub mod completion;
pub mod config;
pub mod constants;
pub mod launcher;
pub mod orchestrator;

// Re-exports
pub use completion::{CompletionBarrier, CompletionGuard};
pub use config::RunConfig;
pub use launcher::{Launcher, Role};
pub use orchestrator::Orchestrator;
