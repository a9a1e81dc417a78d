//! PushKey domain model.

use serde::{Deserialize, Serialize};

/// A push key: the credential third parties use to send messages to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushKey {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub created_at: String,
}

/// `content` payload of the key generation and listing endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyList {
    #[serde(default)]
    pub keys: Vec<PushKey>,
}
