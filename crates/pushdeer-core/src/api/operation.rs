use serde::{Deserialize, Serialize};
use std::fmt;

/// Every remote operation the transport exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiOperation {
    Login,
    UserInfo,
    DeviceReg,
    DeviceList,
    DeviceRename,
    DeviceRemove,
    KeyGen,
    KeyRegen,
    KeyRename,
    KeyList,
    KeyRemove,
    MessagePush,
    MessageList,
    MessageRemove,
}

impl ApiOperation {
    /// Stable name used as the `entry` tag of log records.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiOperation::Login => "login",
            ApiOperation::UserInfo => "userInfo",
            ApiOperation::DeviceReg => "deviceReg",
            ApiOperation::DeviceList => "deviceList",
            ApiOperation::DeviceRename => "deviceRename",
            ApiOperation::DeviceRemove => "deviceRemove",
            ApiOperation::KeyGen => "keyGen",
            ApiOperation::KeyRegen => "keyRegen",
            ApiOperation::KeyRename => "keyRename",
            ApiOperation::KeyList => "keyList",
            ApiOperation::KeyRemove => "keyRemove",
            ApiOperation::MessagePush => "messagePush",
            ApiOperation::MessageList => "messageList",
            ApiOperation::MessageRemove => "messageRemove",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
