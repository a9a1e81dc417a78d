//! Push key registry facet.

use pushdeer_core::api::ApiOperation;
use pushdeer_core::error::Result;
use pushdeer_core::key::PushKey;

use super::Orchestrator;

impl Orchestrator {
    /// Generates a new key; the response carries the full key list, which
    /// replaces the cache.
    pub async fn generate_key(&self) -> Result<Vec<PushKey>> {
        let token = self.state.token();
        let keys = self
            .call(ApiOperation::KeyGen, self.api.key_gen(&token))
            .await?
            .keys;

        self.state.replace_keys(keys.clone());
        Ok(keys)
    }

    /// Issues a fresh secret for `key_id`, then re-lists.
    ///
    /// The re-list runs whenever the service answered; a rejection is
    /// returned after it.
    pub async fn regenerate_key(&self, key_id: &str) -> Result<Vec<PushKey>> {
        let token = self.state.token();
        let rejection = self
            .call_settled(ApiOperation::KeyRegen, self.api.key_regen(&token, key_id))
            .await?;

        let keys = self.list_keys().await;
        match rejection {
            Some(err) => Err(err),
            None => keys,
        }
    }

    /// Renames a key on the server without refreshing the cache.
    pub async fn rename_key(&self, key: &PushKey) -> Result<()> {
        let token = self.state.token();
        self.call_ack(
            ApiOperation::KeyRename,
            self.api.key_rename(&token, &key.id, &key.name),
        )
        .await
    }

    /// Fetches every key and installs them in service order.
    pub async fn list_keys(&self) -> Result<Vec<PushKey>> {
        let token = self.state.token();
        let keys = self
            .call(ApiOperation::KeyList, self.api.key_list(&token))
            .await?
            .keys;

        self.state.replace_keys(keys.clone());
        Ok(keys)
    }

    /// Removes a key, then re-lists. Only a transport failure skips the re-list.
    pub async fn remove_key(&self, key_id: &str) -> Result<Vec<PushKey>> {
        let token = self.state.token();
        let rejection = self
            .call_settled(ApiOperation::KeyRemove, self.api.key_remove(&token, key_id))
            .await?;

        let keys = self.list_keys().await;
        match rejection {
            Some(err) => Err(err),
            None => keys,
        }
    }
}
