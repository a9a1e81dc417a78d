//! Message domain model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendering type of a pushed message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Markdown,
    Text,
    Image,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Markdown => "markdown",
            MessageType::Text => "text",
            MessageType::Image => "image",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markdown" => Ok(MessageType::Markdown),
            "text" => Ok(MessageType::Text),
            "image" => Ok(MessageType::Image),
            other => Err(format!("Unknown message type: {}", other)),
        }
    }
}

/// A message record as returned by the message history endpoint.
///
/// Messages are never held in volatile state; batches go straight into the
/// [`MessageRepository`](super::MessageRepository).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub desp: String,
    #[serde(rename = "type", default)]
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pushkey_name: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// `content` payload of the message history endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageList {
    #[serde(default)]
    pub messages: Vec<Message>,
}
