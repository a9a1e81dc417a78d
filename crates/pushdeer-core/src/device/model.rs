//! DeviceInfo domain model.

use serde::{Deserialize, Serialize};

/// One device registered with the push service.
///
/// `id` is the server-side row id used for rename/remove, while `device_id`
/// is the push identity of the physical device (the value the settings store
/// reports as `this_device_id`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub name: String,
    pub device_id: String,
    /// 1 when the device is an app clip, 0 otherwise
    #[serde(default)]
    pub is_clip: i32,
}

impl DeviceInfo {
    /// Creates a registration candidate for the local device.
    ///
    /// The server assigns `id` and `uid` on registration.
    pub fn new(name: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            device_id: device_id.into(),
            ..Self::default()
        }
    }

    /// Returns a copy with the display name replaced.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

/// `content` payload of the device registration and listing endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceList {
    #[serde(default)]
    pub devices: Vec<DeviceInfo>,
}
