// In-memory MessageQueue Implementation

use async_trait::async_trait;
use msgqueue_core::domain::Message;
use msgqueue_core::port::MessageQueue;
use std::collections::VecDeque;
use tokio::sync::Mutex;
use tracing::info;

/// FIFO queue behind a single exclusive lock
///
/// Every access, reads included, goes through the same mutex. Messages are
/// appended at the back and removed from the front only.
#[derive(Default)]
pub struct InMemoryMessageQueue {
    messages: Mutex<VecDeque<Message>>,
}

impl InMemoryMessageQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageQueue for InMemoryMessageQueue {
    async fn produce(&self, message: Message) {
        let mut messages = self.messages.lock().await;
        // Logged under the lock so log order matches queue order
        info!("Produced: {}", message);
        messages.push_back(message);
    }

    async fn consume(&self) -> Option<Message> {
        let mut messages = self.messages.lock().await;
        match messages.pop_front() {
            Some(message) => {
                info!("Consumed: {}", message);
                Some(message)
            }
            None => {
                info!("Queue is empty");
                None
            }
        }
    }

    async fn len(&self) -> usize {
        self.messages.lock().await.len()
    }
}
