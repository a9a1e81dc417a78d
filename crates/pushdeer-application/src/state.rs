//! Observable client state.

use tokio::sync::watch;

use pushdeer_core::device::DeviceInfo;
use pushdeer_core::key::PushKey;
use pushdeer_core::user::UserInfo;

/// State container owned by one [`Orchestrator`](crate::Orchestrator).
///
/// Each field lives in its own `watch` channel: readers take snapshots or
/// subscribe for changes, and only the facet that owns a field writes it
/// (crate-private setters). Every write replaces the whole value, so an
/// observer never sees a half-installed collection. There is no ordering
/// between writes issued by concurrent operations; the last one wins.
pub struct ClientState {
    token: watch::Sender<String>,
    user_info: watch::Sender<UserInfo>,
    devices: watch::Sender<Vec<DeviceInfo>>,
    keys: watch::Sender<Vec<PushKey>>,
}

impl ClientState {
    /// Creates state holding `token` and empty caches.
    pub fn new(token: impl Into<String>) -> Self {
        let (token, _) = watch::channel(token.into());
        let (user_info, _) = watch::channel(UserInfo::default());
        let (devices, _) = watch::channel(Vec::new());
        let (keys, _) = watch::channel(Vec::new());
        Self {
            token,
            user_info,
            devices,
            keys,
        }
    }

    /// Current session token; empty when unauthenticated.
    pub fn token(&self) -> String {
        self.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.borrow().is_empty()
    }

    pub fn user_info(&self) -> UserInfo {
        self.user_info.borrow().clone()
    }

    pub fn devices(&self) -> Vec<DeviceInfo> {
        self.devices.borrow().clone()
    }

    pub fn keys(&self) -> Vec<PushKey> {
        self.keys.borrow().clone()
    }

    /// Returns true if a cached device carries `device_id`.
    pub fn has_device(&self, device_id: &str) -> bool {
        self.devices
            .borrow()
            .iter()
            .any(|device| device.device_id == device_id)
    }

    pub fn subscribe_token(&self) -> watch::Receiver<String> {
        self.token.subscribe()
    }

    pub fn subscribe_user_info(&self) -> watch::Receiver<UserInfo> {
        self.user_info.subscribe()
    }

    pub fn subscribe_devices(&self) -> watch::Receiver<Vec<DeviceInfo>> {
        self.devices.subscribe()
    }

    pub fn subscribe_keys(&self) -> watch::Receiver<Vec<PushKey>> {
        self.keys.subscribe()
    }

    pub(crate) fn set_token(&self, token: String) {
        self.token.send_replace(token);
    }

    pub(crate) fn replace_user_info(&self, user_info: UserInfo) {
        self.user_info.send_replace(user_info);
    }

    pub(crate) fn replace_devices(&self, devices: Vec<DeviceInfo>) {
        self.devices.send_replace(devices);
    }

    pub(crate) fn replace_keys(&self, keys: Vec<PushKey>) {
        self.keys.send_replace(keys);
    }

    /// Drops the token and every volatile cache.
    pub(crate) fn reset(&self) {
        self.set_token(String::new());
        self.replace_user_info(UserInfo::default());
        self.replace_devices(Vec::new());
        self.replace_keys(Vec::new());
    }
}
