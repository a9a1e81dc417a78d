//! Session facet: token lifecycle and user profile.

use pushdeer_core::api::ApiOperation;
use pushdeer_core::error::Result;
use pushdeer_core::user::UserInfo;

use super::Orchestrator;

impl Orchestrator {
    /// Ensures a session token exists.
    ///
    /// - A token is already held: returns it without touching the network.
    /// - No token and an empty `exchange_token`: returns `Ok(None)`.
    /// - Otherwise the exchange token is traded for a session token, which is
    ///   persisted and then installed before this returns.
    ///
    /// # Errors
    ///
    /// Returns the transport/service failure of the exchange, or the
    /// settings failure if the token cannot be persisted. State is left
    /// untouched in both cases.
    pub async fn login(&self, exchange_token: &str) -> Result<Option<String>> {
        let current = self.state.token();
        if !current.is_empty() {
            return Ok(Some(current));
        }
        if exchange_token.is_empty() {
            return Ok(None);
        }

        let operation = ApiOperation::Login;
        let issued = self
            .call(operation, self.api.login_id_token(exchange_token))
            .await?
            .token;

        self.settings
            .set_user_token(&issued)
            .await
            .map_err(|err| self.report(operation.as_str(), err))?;
        self.state.set_token(issued.clone());

        tracing::info!("Session token issued");
        self.log
            .info(operation.as_str(), "normally", "session token issued");
        Ok(Some(issued))
    }

    /// Fetches the user profile and replaces the cached one.
    pub async fn fetch_user_info(&self) -> Result<UserInfo> {
        let token = self.state.token();
        let info = self
            .call(ApiOperation::UserInfo, self.api.user_info(&token))
            .await?;

        self.state.replace_user_info(info.clone());
        Ok(info)
    }

    /// Forgets the session: clears the persisted token and every volatile
    /// cache. Stored message history is kept.
    pub async fn logout(&self) -> Result<()> {
        self.settings
            .set_user_token("")
            .await
            .map_err(|err| self.report("logout", err))?;
        self.state.reset();

        self.log.info("logout", "normally", "session cleared");
        Ok(())
    }
}
