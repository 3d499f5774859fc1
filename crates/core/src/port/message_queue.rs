// Message Queue Port (Interface)

use crate::domain::Message;
use async_trait::async_trait;

/// FIFO message queue with exclusive-access mutation
///
/// Implementations:
/// - InMemoryMessageQueue (infra-memory): mutex-guarded VecDeque
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Append a message at the tail. Never fails.
    async fn produce(&self, message: Message);

    /// Pop the head message
    ///
    /// An empty queue is a normal outcome: the call returns `None` right
    /// away and the attempt is dropped. Callers that need the message
    /// later have to call again; nothing is kept pending.
    async fn consume(&self) -> Option<Message>;

    /// Number of messages currently queued
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Mock queue behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Plain FIFO
        Fifo,
        /// Panic inside consume (for barrier release testing)
        PanicOnConsume(String),
    }

    /// Mock MessageQueue for testing, counts calls
    pub struct MockMessageQueue {
        behavior: MockBehavior,
        messages: Arc<Mutex<VecDeque<Message>>>,
        produce_calls: Arc<Mutex<usize>>,
        consume_calls: Arc<Mutex<usize>>,
    }

    impl MockMessageQueue {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                messages: Arc::new(Mutex::new(VecDeque::new())),
                produce_calls: Arc::new(Mutex::new(0)),
                consume_calls: Arc::new(Mutex::new(0)),
            }
        }
        pub fn new_fifo() -> Self {
            Self::new(MockBehavior::Fifo)
        }
        pub fn new_panic_inducing(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::PanicOnConsume(message.into()))
        }
        pub fn produce_calls(&self) -> usize {
            *self.produce_calls.lock().unwrap()
        }
        pub fn consume_calls(&self) -> usize {
            *self.consume_calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl MessageQueue for MockMessageQueue {
        async fn produce(&self, message: Message) {
            *self.produce_calls.lock().unwrap() += 1;
            self.messages.lock().unwrap().push_back(message);
        }
        async fn consume(&self) -> Option<Message> {
            *self.consume_calls.lock().unwrap() += 1;
            match &self.behavior {
                MockBehavior::Fifo => self.messages.lock().unwrap().pop_front(),
                MockBehavior::PanicOnConsume(msg) => panic!("{}", msg),
            }
        }
        async fn len(&self) -> usize {
            self.messages.lock().unwrap().len()
        }
    }
}
