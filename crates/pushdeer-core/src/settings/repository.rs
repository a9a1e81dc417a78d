//! Setting store trait.

use async_trait::async_trait;

use crate::error::Result;

/// Repository for persisted client settings.
#[async_trait]
pub trait SettingStore: Send + Sync {
    /// Returns the persisted session token, or an empty string when the user
    /// has never logged in.
    async fn user_token(&self) -> String;

    /// Persists the session token. An empty string clears it.
    async fn set_user_token(&self, token: &str) -> Result<()>;

    /// Returns the push identity of this device.
    async fn this_device_id(&self) -> String;
}
