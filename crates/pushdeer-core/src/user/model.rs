//! UserInfo domain model.

use serde::{Deserialize, Serialize};

/// Snapshot of the authenticated user's profile.
///
/// The orchestrator replaces this wholesale on every successful fetch; fields
/// are never merged individually.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub apple_id: String,
    #[serde(default)]
    pub wechat_id: String,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl UserInfo {
    /// Returns true if no profile has been fetched yet.
    pub fn is_empty(&self) -> bool {
        self.id == 0 && self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(UserInfo::default().is_empty());
    }

    #[test]
    fn test_partial_payload_deserializes() {
        let info: UserInfo = serde_json::from_str(r#"{"id": 3, "name": "deer"}"#).unwrap();
        assert_eq!(info.id, 3);
        assert_eq!(info.name, "deer");
        assert!(info.email.is_empty());
        assert!(!info.is_empty());
    }
}
