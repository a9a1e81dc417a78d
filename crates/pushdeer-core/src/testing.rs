//! In-memory doubles for the collaborator traits.
//!
//! Enabled with the `testing` feature. `FakePushDeerApi` behaves like a small
//! single-user PushDeer server: it keeps devices, keys and messages, checks
//! the session token, and can be told to fail, reject or return empty
//! content for any operation.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::api::{
    ActionAck, ApiOperation, ApiResponse, PushDeerApi, PushRequest, PushResult, TokenOnly,
};
use crate::device::{DeviceInfo, DeviceList};
use crate::error::{PushDeerError, Result};
use crate::key::{KeyList, PushKey};
use crate::logdog::{EventLog, LogDog, LogLevel};
use crate::message::{Message, MessageList, MessageRepository};
use crate::settings::SettingStore;
use crate::user::UserInfo;

/// Code the fake server returns for an unknown session token.
pub const INVALID_TOKEN_CODE: i64 = 80403;
/// Code the fake server returns for an unknown id or push key.
pub const BAD_ARGUMENT_CODE: i64 = 80501;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Default)]
struct FakeServer {
    issued_token: String,
    user: UserInfo,
    devices: Vec<DeviceInfo>,
    keys: Vec<PushKey>,
    messages: Vec<Message>,
    next_id: i64,
    failures: HashMap<ApiOperation, PushDeerError>,
    rejections: HashMap<ApiOperation, (i64, String)>,
    empty: HashSet<ApiOperation>,
    ignore_registrations: bool,
    calls: Vec<ApiOperation>,
}

impl FakeServer {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Records the call and applies any injected fault.
    fn enter<T>(&mut self, operation: ApiOperation) -> Option<Result<ApiResponse<T>>> {
        self.calls.push(operation);
        if let Some(err) = self.failures.get(&operation) {
            return Some(Err(err.clone()));
        }
        if let Some((code, message)) = self.rejections.get(&operation) {
            return Some(Ok(ApiResponse::failed(*code, message.clone())));
        }
        if self.empty.contains(&operation) {
            return Some(Ok(ApiResponse::empty()));
        }
        None
    }

    fn authorize<T>(&self, token: &str) -> Option<ApiResponse<T>> {
        if token.is_empty() || token != self.issued_token {
            return Some(ApiResponse::failed(INVALID_TOKEN_CODE, "invalid token"));
        }
        None
    }
}

/// Scripted in-memory PushDeer server.
#[derive(Default)]
pub struct FakePushDeerApi {
    server: Mutex<FakeServer>,
}

macro_rules! guard {
    ($server:ident, $op:expr) => {
        if let Some(outcome) = $server.enter($op) {
            return outcome;
        }
    };
    ($server:ident, $op:expr, $token:expr) => {
        guard!($server, $op);
        if let Some(rejected) = $server.authorize($token) {
            return Ok(rejected);
        }
    };
}

impl FakePushDeerApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the session token the login exchange issues and requests must carry.
    pub fn with_token(self, token: impl Into<String>) -> Self {
        lock(&self.server).issued_token = token.into();
        self
    }

    pub fn with_user(self, user: UserInfo) -> Self {
        lock(&self.server).user = user;
        self
    }

    /// Seeds the server-side device table, in registration order.
    pub fn with_devices(self, devices: Vec<DeviceInfo>) -> Self {
        self.set_devices(devices);
        self
    }

    pub fn with_keys(self, keys: Vec<PushKey>) -> Self {
        {
            let mut server = lock(&self.server);
            let highest = keys.iter().filter_map(|k| k.id.parse::<i64>().ok()).max();
            server.next_id = server.next_id.max(highest.unwrap_or(0));
            server.keys = keys;
        }
        self
    }

    pub fn with_messages(self, messages: Vec<Message>) -> Self {
        {
            let mut server = lock(&self.server);
            let highest = messages.iter().map(|m| m.id).max();
            server.next_id = server.next_id.max(highest.unwrap_or(0));
            server.messages = messages;
        }
        self
    }

    /// Replaces the server-side device table, as another client would.
    pub fn set_devices(&self, devices: Vec<DeviceInfo>) {
        let mut server = lock(&self.server);
        server.next_id = server.next_id.max(devices.iter().map(|d| d.id).max().unwrap_or(0));
        server.devices = devices;
    }

    /// Makes `operation` fail at the transport level.
    pub fn fail(&self, operation: ApiOperation, err: PushDeerError) {
        lock(&self.server).failures.insert(operation, err);
    }

    /// Makes `operation` answer with a non-success code.
    pub fn reject(&self, operation: ApiOperation, code: i64, message: impl Into<String>) {
        lock(&self.server)
            .rejections
            .insert(operation, (code, message.into()));
    }

    /// Makes `operation` answer with success but no content.
    pub fn respond_empty(&self, operation: ApiOperation) {
        lock(&self.server).empty.insert(operation);
    }

    /// Makes registrations answer with the current device table without
    /// adding the submitted device.
    pub fn ignore_registrations(&self) {
        lock(&self.server).ignore_registrations = true;
    }

    /// Removes every injected fault.
    pub fn heal(&self) {
        let mut server = lock(&self.server);
        server.failures.clear();
        server.rejections.clear();
        server.empty.clear();
        server.ignore_registrations = false;
    }

    /// Every operation invoked so far, in call order.
    pub fn calls(&self) -> Vec<ApiOperation> {
        lock(&self.server).calls.clone()
    }

    pub fn call_count(&self, operation: ApiOperation) -> usize {
        lock(&self.server)
            .calls
            .iter()
            .filter(|op| **op == operation)
            .count()
    }

    pub fn server_devices(&self) -> Vec<DeviceInfo> {
        lock(&self.server).devices.clone()
    }

    pub fn server_keys(&self) -> Vec<PushKey> {
        lock(&self.server).keys.clone()
    }

    pub fn server_messages(&self) -> Vec<Message> {
        lock(&self.server).messages.clone()
    }
}

#[async_trait]
impl PushDeerApi for FakePushDeerApi {
    async fn login_id_token(&self, id_token: &str) -> Result<ApiResponse<TokenOnly>> {
        let mut server = lock(&self.server);
        guard!(server, ApiOperation::Login);
        if id_token.is_empty() {
            return Ok(ApiResponse::failed(BAD_ARGUMENT_CODE, "idToken required"));
        }
        if server.issued_token.is_empty() {
            server.issued_token = format!("T-{}", id_token);
        }
        Ok(ApiResponse::ok(TokenOnly {
            token: server.issued_token.clone(),
        }))
    }

    async fn user_info(&self, token: &str) -> Result<ApiResponse<UserInfo>> {
        let mut server = lock(&self.server);
        guard!(server, ApiOperation::UserInfo, token);
        Ok(ApiResponse::ok(server.user.clone()))
    }

    async fn device_reg(
        &self,
        token: &str,
        device: &DeviceInfo,
    ) -> Result<ApiResponse<DeviceList>> {
        let mut server = lock(&self.server);
        guard!(server, ApiOperation::DeviceReg, token);
        if server.ignore_registrations {
            return Ok(ApiResponse::ok(DeviceList {
                devices: server.devices.clone(),
            }));
        }
        let uid = server.user.id.to_string();
        match server
            .devices
            .iter()
            .position(|d| d.device_id == device.device_id)
        {
            Some(index) => {
                let existing = &mut server.devices[index];
                existing.name = device.name.clone();
                existing.is_clip = device.is_clip;
            }
            None => {
                let id = server.next_id();
                server.devices.push(DeviceInfo {
                    id,
                    uid,
                    ..device.clone()
                });
            }
        }
        Ok(ApiResponse::ok(DeviceList {
            devices: server.devices.clone(),
        }))
    }

    async fn device_list(&self, token: &str) -> Result<ApiResponse<DeviceList>> {
        let mut server = lock(&self.server);
        guard!(server, ApiOperation::DeviceList, token);
        Ok(ApiResponse::ok(DeviceList {
            devices: server.devices.clone(),
        }))
    }

    async fn device_rename(
        &self,
        token: &str,
        id: i64,
        name: &str,
    ) -> Result<ApiResponse<ActionAck>> {
        let mut server = lock(&self.server);
        guard!(server, ApiOperation::DeviceRename, token);
        match server.devices.iter_mut().find(|d| d.id == id) {
            Some(device) => {
                device.name = name.to_string();
                Ok(ApiResponse::ok(ActionAck::done()))
            }
            None => Ok(ApiResponse::failed(BAD_ARGUMENT_CODE, "device not found")),
        }
    }

    async fn device_remove(&self, token: &str, id: i64) -> Result<ApiResponse<ActionAck>> {
        let mut server = lock(&self.server);
        guard!(server, ApiOperation::DeviceRemove, token);
        let before = server.devices.len();
        server.devices.retain(|d| d.id != id);
        if server.devices.len() == before {
            return Ok(ApiResponse::failed(BAD_ARGUMENT_CODE, "device not found"));
        }
        Ok(ApiResponse::ok(ActionAck::done()))
    }

    async fn key_gen(&self, token: &str) -> Result<ApiResponse<KeyList>> {
        let mut server = lock(&self.server);
        guard!(server, ApiOperation::KeyGen, token);
        let id = server.next_id();
        let uid = server.user.id.to_string();
        let key = format!("PDU{}K{}", uid, id);
        server.keys.push(PushKey {
            id: id.to_string(),
            name: format!("Key{}", id),
            uid,
            key,
            created_at: chrono::Utc::now().to_rfc3339(),
        });
        Ok(ApiResponse::ok(KeyList {
            keys: server.keys.clone(),
        }))
    }

    async fn key_regen(&self, token: &str, id: &str) -> Result<ApiResponse<ActionAck>> {
        let mut server = lock(&self.server);
        guard!(server, ApiOperation::KeyRegen, token);
        let serial = server.next_id();
        match server.keys.iter_mut().find(|k| k.id == id) {
            Some(key) => {
                key.key = format!("{}R{}", key.key, serial);
                Ok(ApiResponse::ok(ActionAck::done()))
            }
            None => Ok(ApiResponse::failed(BAD_ARGUMENT_CODE, "key not found")),
        }
    }

    async fn key_rename(
        &self,
        token: &str,
        id: &str,
        name: &str,
    ) -> Result<ApiResponse<ActionAck>> {
        let mut server = lock(&self.server);
        guard!(server, ApiOperation::KeyRename, token);
        match server.keys.iter_mut().find(|k| k.id == id) {
            Some(key) => {
                key.name = name.to_string();
                Ok(ApiResponse::ok(ActionAck::done()))
            }
            None => Ok(ApiResponse::failed(BAD_ARGUMENT_CODE, "key not found")),
        }
    }

    async fn key_list(&self, token: &str) -> Result<ApiResponse<KeyList>> {
        let mut server = lock(&self.server);
        guard!(server, ApiOperation::KeyList, token);
        Ok(ApiResponse::ok(KeyList {
            keys: server.keys.clone(),
        }))
    }

    async fn key_remove(&self, token: &str, id: &str) -> Result<ApiResponse<ActionAck>> {
        let mut server = lock(&self.server);
        guard!(server, ApiOperation::KeyRemove, token);
        let before = server.keys.len();
        server.keys.retain(|k| k.id != id);
        if server.keys.len() == before {
            return Ok(ApiResponse::failed(BAD_ARGUMENT_CODE, "key not found"));
        }
        Ok(ApiResponse::ok(ActionAck::done()))
    }

    async fn message_push(&self, request: &PushRequest) -> Result<ApiResponse<PushResult>> {
        let mut server = lock(&self.server);
        guard!(server, ApiOperation::MessagePush);
        let Some(key_name) = server
            .keys
            .iter()
            .find(|k| k.key == request.pushkey)
            .map(|k| k.name.clone())
        else {
            return Ok(ApiResponse::failed(BAD_ARGUMENT_CODE, "pushkey not found"));
        };
        let id = server.next_id();
        let uid = server.user.id.to_string();
        server.messages.push(Message {
            id,
            uid,
            text: request.text.clone(),
            desp: request.desp.clone(),
            message_type: request.message_type,
            pushkey_name: Some(key_name),
            created_at: chrono::Utc::now().to_rfc3339(),
        });
        Ok(ApiResponse::ok(PushResult {
            result: vec![format!("{{\"counts\":{}}}", server.devices.len())],
        }))
    }

    async fn message_list(&self, token: &str) -> Result<ApiResponse<MessageList>> {
        let mut server = lock(&self.server);
        guard!(server, ApiOperation::MessageList, token);
        Ok(ApiResponse::ok(MessageList {
            messages: server.messages.clone(),
        }))
    }

    async fn message_remove(&self, token: &str, id: i64) -> Result<ApiResponse<ActionAck>> {
        let mut server = lock(&self.server);
        guard!(server, ApiOperation::MessageRemove, token);
        let before = server.messages.len();
        server.messages.retain(|m| m.id != id);
        if server.messages.len() == before {
            return Ok(ApiResponse::failed(BAD_ARGUMENT_CODE, "message not found"));
        }
        Ok(ApiResponse::ok(ActionAck::done()))
    }
}

/// Settings store kept in memory, recording every token write.
pub struct MemorySettingStore {
    token: Mutex<String>,
    device_id: String,
    writes: Mutex<Vec<String>>,
    read_only: AtomicBool,
}

impl MemorySettingStore {
    pub fn new(token: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(token.into()),
            device_id: device_id.into(),
            writes: Mutex::new(Vec::new()),
            read_only: AtomicBool::new(false),
        }
    }

    /// Every value passed to `set_user_token`, in order.
    pub fn token_writes(&self) -> Vec<String> {
        lock(&self.writes).clone()
    }

    /// Makes subsequent token writes fail.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }
}

#[async_trait]
impl SettingStore for MemorySettingStore {
    async fn user_token(&self) -> String {
        lock(&self.token).clone()
    }

    async fn set_user_token(&self, token: &str) -> Result<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(PushDeerError::settings("settings store is read-only"));
        }
        lock(&self.writes).push(token.to_string());
        *lock(&self.token) = token.to_string();
        Ok(())
    }

    async fn this_device_id(&self) -> String {
        self.device_id.clone()
    }
}

/// Message store kept in memory, preserving batch boundaries.
#[derive(Default)]
pub struct MemoryMessageRepository {
    batches: Mutex<Vec<Vec<Message>>>,
}

impl MemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every inserted batch, in insertion order.
    pub fn batches(&self) -> Vec<Vec<Message>> {
        lock(&self.batches).clone()
    }
}

#[async_trait]
impl MessageRepository for MemoryMessageRepository {
    async fn insert(&self, messages: &[Message]) -> Result<()> {
        lock(&self.batches).push(messages.to_vec());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Message>> {
        Ok(lock(&self.batches).iter().flatten().cloned().collect())
    }
}

/// Event log that keeps every record for later assertions.
#[derive(Default)]
pub struct RecordingEventLog {
    records: Mutex<Vec<LogDog>>,
}

impl RecordingEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogDog> {
        lock(&self.records).clone()
    }

    /// Entries (operation names) of every error record.
    pub fn error_entries(&self) -> Vec<String> {
        lock(&self.records)
            .iter()
            .filter(|r| r.level == LogLevel::Error)
            .map(|r| r.entry.clone())
            .collect()
    }
}

impl EventLog for RecordingEventLog {
    fn info(&self, entry: &str, event: &str, detail: &str) {
        lock(&self.records).push(LogDog::new(LogLevel::Info, entry, event, detail));
    }

    fn error(&self, entry: &str, event: &str, detail: &str) {
        lock(&self.records).push(LogDog::new(LogLevel::Error, entry, event, detail));
    }
}
