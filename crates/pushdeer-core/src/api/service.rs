//! PushDeer API trait.

use async_trait::async_trait;

use crate::api::request::PushRequest;
use crate::api::response::{ActionAck, ApiResponse, PushResult, TokenOnly};
use crate::device::{DeviceInfo, DeviceList};
use crate::error::Result;
use crate::key::KeyList;
use crate::message::MessageList;
use crate::user::UserInfo;

/// Transport capability for the remote push service.
///
/// Implementations execute exactly one request per call and return `Err`
/// only when no response envelope could be obtained. Service-side
/// rejections come back as an [`ApiResponse`] with a non-zero code.
#[async_trait]
pub trait PushDeerApi: Send + Sync {
    /// Trades an external identity token for a session token.
    async fn login_id_token(&self, id_token: &str) -> Result<ApiResponse<TokenOnly>>;

    async fn user_info(&self, token: &str) -> Result<ApiResponse<UserInfo>>;

    /// Registers `device` and returns every device of the user.
    async fn device_reg(&self, token: &str, device: &DeviceInfo)
    -> Result<ApiResponse<DeviceList>>;

    async fn device_list(&self, token: &str) -> Result<ApiResponse<DeviceList>>;

    async fn device_rename(&self, token: &str, id: i64, name: &str)
    -> Result<ApiResponse<ActionAck>>;

    async fn device_remove(&self, token: &str, id: i64) -> Result<ApiResponse<ActionAck>>;

    /// Generates a key and returns every key of the user.
    async fn key_gen(&self, token: &str) -> Result<ApiResponse<KeyList>>;

    async fn key_regen(&self, token: &str, id: &str) -> Result<ApiResponse<ActionAck>>;

    async fn key_rename(&self, token: &str, id: &str, name: &str)
    -> Result<ApiResponse<ActionAck>>;

    async fn key_list(&self, token: &str) -> Result<ApiResponse<KeyList>>;

    async fn key_remove(&self, token: &str, id: &str) -> Result<ApiResponse<ActionAck>>;

    async fn message_push(&self, request: &PushRequest) -> Result<ApiResponse<PushResult>>;

    async fn message_list(&self, token: &str) -> Result<ApiResponse<MessageList>>;

    async fn message_remove(&self, token: &str, id: i64) -> Result<ApiResponse<ActionAck>>;
}
