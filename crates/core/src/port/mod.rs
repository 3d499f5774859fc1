// Port Layer - Interfaces for external dependencies

pub mod message_queue;

// Re-exports
pub use message_queue::MessageQueue;
