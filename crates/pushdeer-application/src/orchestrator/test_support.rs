//! Shared fixture for the orchestrator facet tests.

use std::sync::Arc;

use pushdeer_core::device::DeviceInfo;
use pushdeer_core::key::PushKey;
use pushdeer_core::message::Message;
use pushdeer_core::testing::{
    FakePushDeerApi, MemoryMessageRepository, MemorySettingStore, RecordingEventLog,
};

use super::Orchestrator;

pub(crate) const THIS_DEVICE: &str = "this-device";
pub(crate) const TOKEN: &str = "T1";

pub(crate) struct Fixture {
    pub orchestrator: Orchestrator,
    pub api: Arc<FakePushDeerApi>,
    pub settings: Arc<MemorySettingStore>,
    pub messages: Arc<MemoryMessageRepository>,
    pub log: Arc<RecordingEventLog>,
}

impl Fixture {
    /// Orchestrator whose settings store already holds `stored_token`.
    pub async fn new(api: FakePushDeerApi, stored_token: &str) -> Self {
        let api = Arc::new(api);
        let settings = Arc::new(MemorySettingStore::new(stored_token, THIS_DEVICE));
        let messages = Arc::new(MemoryMessageRepository::new());
        let log = Arc::new(RecordingEventLog::new());

        let orchestrator = Orchestrator::new(
            api.clone(),
            settings.clone(),
            messages.clone(),
            log.clone(),
        )
        .await;

        Self {
            orchestrator,
            api,
            settings,
            messages,
            log,
        }
    }

    /// Orchestrator with a restored session accepted by the fake server.
    pub async fn signed_in(api: FakePushDeerApi) -> Self {
        Self::new(api.with_token(TOKEN), TOKEN).await
    }
}

pub(crate) fn device(id: i64, device_id: &str) -> DeviceInfo {
    DeviceInfo {
        id,
        uid: "1".to_string(),
        name: format!("device-{}", id),
        device_id: device_id.to_string(),
        is_clip: 0,
    }
}

pub(crate) fn key(id: &str) -> PushKey {
    PushKey {
        id: id.to_string(),
        name: format!("key-{}", id),
        uid: "1".to_string(),
        key: format!("PDU1K{}", id),
        created_at: String::new(),
    }
}

pub(crate) fn message(id: i64, text: &str) -> Message {
    Message {
        id,
        uid: "1".to_string(),
        text: text.to_string(),
        ..Message::default()
    }
}
