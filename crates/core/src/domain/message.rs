// Message Domain Model

use serde::Serialize;
use std::fmt;

/// Message identifier (1-based, assigned by the producing launcher)
pub type MessageId = u64;

/// Immutable message moved through the queue and the result channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    id: MessageId,
    content: String,
}

impl Message {
    pub fn new(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// Message whose content is derived from its id ("Message 3")
    pub fn numbered(id: MessageId) -> Self {
        Self::new(id, format!("Message {}", id))
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{id:{} content:{}}}", self.id, self.content)
    }
}
