use serde::{Deserialize, Serialize};

use crate::message::MessageType;

/// Parameters of a message push.
///
/// Pushes are authenticated by the push key, not by the session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushRequest {
    pub pushkey: String,
    pub text: String,
    pub desp: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
}

impl PushRequest {
    /// Creates a markdown push with an empty description.
    pub fn new(pushkey: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            pushkey: pushkey.into(),
            text: text.into(),
            desp: String::new(),
            message_type: MessageType::Markdown,
        }
    }

    pub fn with_desp(mut self, desp: impl Into<String>) -> Self {
        self.desp = desp.into();
        self
    }

    pub fn with_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }
}
