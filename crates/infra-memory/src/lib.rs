// msgqueue Infrastructure - In-Memory Adapter
// Implements: MessageQueue

mod message_queue;

pub use message_queue::InMemoryMessageQueue;
