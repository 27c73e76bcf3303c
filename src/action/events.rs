use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

/// Host-facing notification, serialized to the `{"type": ..., "data": {...}}`
/// wire shape the plugin host expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Event {
    Status { description: String, done: bool },
    Message { content: String },
}

impl Event {
    pub fn status(description: impl Into<String>, done: bool) -> Self {
        Event::Status {
            description: description.into(),
            done,
        }
    }

    pub fn message(content: impl Into<String>) -> Self {
        Event::Message {
            content: content.into(),
        }
    }
}

/// What the host shows when the action asks the user to pick a model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputRequest {
    pub title: String,
    pub message: String,
    pub placeholder: String,
}

/// Sink for progress and result notifications.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: Event) -> Result<()>;
}

/// Collaborator that can ask the user for a line of input. `None` means the
/// prompt was dismissed without an answer.
#[async_trait]
pub trait InputPrompt: Send + Sync {
    async fn request(&self, request: InputRequest) -> Result<Option<String>>;
}
