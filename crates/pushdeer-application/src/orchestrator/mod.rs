//! Session & resource orchestrator.
//!
//! The orchestrator is split into facets, each an `impl Orchestrator` block
//! in its own module:
//!
//! - `session`: token lifecycle and user profile
//! - `devices`: device registry sync
//! - `keys`: push key registry sync
//! - `messages`: message push and history sync
//!
//! Every remote operation follows the same shape: read the token, invoke the
//! transport, commit the new state, then return. Failures are recorded
//! through the [`EventLog`] under the operation name before being returned,
//! and never touch cached state.
//!
//! Mutations followed by a refresh (removals, key regeneration, message
//! push) refresh whenever the service answered, including with a rejection
//! code. Only a transport failure skips the refresh.

mod devices;
mod keys;
mod messages;
mod session;

#[cfg(test)]
pub(crate) mod test_support;

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use pushdeer_core::api::{ApiOperation, ApiResponse, PushDeerApi};
use pushdeer_core::device::DeviceInfo;
use pushdeer_core::error::{PushDeerError, Result};
use pushdeer_core::key::PushKey;
use pushdeer_core::logdog::EventLog;
use pushdeer_core::message::MessageRepository;
use pushdeer_core::settings::SettingStore;
use pushdeer_core::user::UserInfo;

use crate::absorbing::Absorbing;
use crate::state::ClientState;

/// Client-side orchestrator between the PushDeer service and a presentation layer.
pub struct Orchestrator {
    api: Arc<dyn PushDeerApi>,
    settings: Arc<dyn SettingStore>,
    messages: Arc<dyn MessageRepository>,
    log: Arc<dyn EventLog>,
    state: ClientState,
}

impl Orchestrator {
    /// Creates an orchestrator, restoring the session token from `settings`.
    pub async fn new(
        api: Arc<dyn PushDeerApi>,
        settings: Arc<dyn SettingStore>,
        messages: Arc<dyn MessageRepository>,
        log: Arc<dyn EventLog>,
    ) -> Self {
        let token = settings.user_token().await;
        tracing::debug!(
            "Orchestrator created ({})",
            if token.is_empty() {
                "no stored session"
            } else {
                "stored session restored"
            }
        );

        Self {
            api,
            settings,
            messages,
            log,
            state: ClientState::new(token),
        }
    }

    /// Wraps this orchestrator in the failure-absorbing policy layer.
    pub fn absorbing(&self) -> Absorbing<'_> {
        Absorbing::new(self)
    }

    /// Observable client state.
    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// Current session token; empty when unauthenticated.
    pub fn token(&self) -> String {
        self.state.token()
    }

    /// Last fetched user profile.
    pub fn user_info(&self) -> UserInfo {
        self.state.user_info()
    }

    /// Cached device collection.
    pub fn devices(&self) -> Vec<DeviceInfo> {
        self.state.devices()
    }

    /// Cached push key collection.
    pub fn keys(&self) -> Vec<PushKey> {
        self.state.keys()
    }

    /// Receiver notified on every device cache replacement.
    pub fn subscribe_devices(&self) -> watch::Receiver<Vec<DeviceInfo>> {
        self.state.subscribe_devices()
    }

    /// Receiver notified on every key cache replacement.
    pub fn subscribe_keys(&self) -> watch::Receiver<Vec<PushKey>> {
        self.state.subscribe_keys()
    }

    /// Awaits a transport call and unwraps the payload the operation consumes.
    async fn call<T, F>(&self, operation: ApiOperation, request: F) -> Result<T>
    where
        F: Future<Output = Result<ApiResponse<T>>>,
    {
        request
            .await
            .and_then(|response| response.into_content(operation))
            .map_err(|err| self.report(operation.as_str(), err))
    }

    /// Awaits a transport call whose payload is ignored; only the code counts.
    async fn call_ack<T, F>(&self, operation: ApiOperation, request: F) -> Result<()>
    where
        F: Future<Output = Result<ApiResponse<T>>>,
    {
        request
            .await
            .and_then(|response| response.into_ack())
            .map(|_| ())
            .map_err(|err| self.report(operation.as_str(), err))
    }

    /// Awaits a transport call that is followed by a refresh.
    ///
    /// A transport failure is returned as `Err`. A service rejection is
    /// recorded and handed back as `Ok(Some(_))` so the caller still refreshes.
    async fn call_settled<T, F>(
        &self,
        operation: ApiOperation,
        request: F,
    ) -> Result<Option<PushDeerError>>
    where
        F: Future<Output = Result<ApiResponse<T>>>,
    {
        let response = request
            .await
            .map_err(|err| self.report(operation.as_str(), err))?;
        Ok(response
            .into_ack()
            .err()
            .map(|err| self.report(operation.as_str(), err)))
    }

    /// Records a failure under `entry` and hands it back.
    fn report(&self, entry: &str, err: PushDeerError) -> PushDeerError {
        tracing::warn!("{} failed: {}", entry, err);
        self.log.error(entry, "", &err.to_string());
        err
    }
}
