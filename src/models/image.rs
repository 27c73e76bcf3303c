use serde::{Deserialize, Serialize};

use crate::models::common::{ModelKey, Requester};

#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub model: ModelKey,
    pub requester: Option<Requester>,
}

/// One entry of the gateway response's `data` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageData {
    pub b64_json: String,
}

/// Response envelope from the gateway. Anything without a `data` key is
/// rejected before deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayImageResponse {
    pub data: Vec<ImageData>,
}

/// Minimal chat transcript shape handed over by the plugin host. The prompt
/// for a generation is the content of the last message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatBody {
    pub messages: Vec<ChatMessage>,
}

impl ChatBody {
    pub fn last_content(&self) -> Option<&str> {
        self.messages.last().map(|message| message.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_content_takes_the_final_message() {
        let body = ChatBody {
            messages: vec![
                ChatMessage {
                    role: "assistant".to_string(),
                    content: "Here is a prompt idea".to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: "A cat. Negative: blurry".to_string(),
                },
            ],
        };
        assert_eq!(body.last_content(), Some("A cat. Negative: blurry"));

        assert_eq!(ChatBody::default().last_content(), None);
    }
}
