//! Failure-absorbing policy layer.

use pushdeer_core::device::DeviceInfo;
use pushdeer_core::key::PushKey;
use pushdeer_core::message::{Message, MessageType};
use pushdeer_core::user::UserInfo;

use crate::orchestrator::Orchestrator;

/// View of an [`Orchestrator`] whose operations never fail.
///
/// Every failure has already been recorded through the orchestrator's
/// `EventLog` by the time it reaches this layer, so here it simply becomes
/// `None`. Caches reflect whatever refresh the operation still ran. A presentation layer that only
/// renders the observable state can drive the client through this view and
/// ignore the outcomes entirely.
#[derive(Clone, Copy)]
pub struct Absorbing<'a> {
    inner: &'a Orchestrator,
}

impl<'a> Absorbing<'a> {
    pub fn new(inner: &'a Orchestrator) -> Self {
        Self { inner }
    }

    /// The wrapped orchestrator, for reading state.
    pub fn inner(&self) -> &'a Orchestrator {
        self.inner
    }

    /// `None` both when no token could be obtained and when the exchange failed.
    pub async fn login(&self, exchange_token: &str) -> Option<String> {
        self.inner.login(exchange_token).await.ok().flatten()
    }

    pub async fn fetch_user_info(&self) -> Option<UserInfo> {
        self.inner.fetch_user_info().await.ok()
    }

    pub async fn logout(&self) -> Option<()> {
        self.inner.logout().await.ok()
    }

    pub async fn register_device(&self, device: &DeviceInfo) -> Option<DeviceInfo> {
        self.inner.register_device(device).await.ok().flatten()
    }

    pub async fn list_devices(&self) -> Option<Vec<DeviceInfo>> {
        self.inner.list_devices().await.ok()
    }

    pub async fn needs_registration(&self) -> bool {
        self.inner.needs_registration().await
    }

    pub async fn remove_device(&self, id: i64) -> Option<Vec<DeviceInfo>> {
        self.inner.remove_device(id).await.ok()
    }

    pub async fn rename_device(&self, device: &DeviceInfo) -> Option<()> {
        self.inner.rename_device(device).await.ok()
    }

    pub async fn generate_key(&self) -> Option<Vec<PushKey>> {
        self.inner.generate_key().await.ok()
    }

    pub async fn regenerate_key(&self, key_id: &str) -> Option<Vec<PushKey>> {
        self.inner.regenerate_key(key_id).await.ok()
    }

    pub async fn rename_key(&self, key: &PushKey) -> Option<()> {
        self.inner.rename_key(key).await.ok()
    }

    pub async fn list_keys(&self) -> Option<Vec<PushKey>> {
        self.inner.list_keys().await.ok()
    }

    pub async fn remove_key(&self, key_id: &str) -> Option<Vec<PushKey>> {
        self.inner.remove_key(key_id).await.ok()
    }

    pub async fn push_message(
        &self,
        text: &str,
        desp: &str,
        message_type: MessageType,
        pushkey: &str,
    ) -> Option<Vec<Message>> {
        self.inner
            .push_message(text, desp, message_type, pushkey)
            .await
            .ok()
    }

    pub async fn fetch_messages(&self) -> Option<Vec<Message>> {
        self.inner.fetch_messages().await.ok()
    }

    pub async fn remove_message(&self, message_id: i64) -> Option<Vec<Message>> {
        self.inner.remove_message(message_id).await.ok()
    }
}
