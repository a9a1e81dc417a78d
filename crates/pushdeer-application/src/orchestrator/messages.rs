//! Message sync facet.

use pushdeer_core::api::{ApiOperation, PushRequest};
use pushdeer_core::error::{PushDeerError, Result};
use pushdeer_core::message::{Message, MessageType};

use super::Orchestrator;

impl Orchestrator {
    /// Pushes a message through `pushkey`, then pulls the message history.
    ///
    /// The history is pulled whenever the service answered. A rejected push
    /// is returned after the pull; a transport failure skips it.
    ///
    /// # Returns
    ///
    /// The history batch fetched after the push.
    pub async fn push_message(
        &self,
        text: &str,
        desp: &str,
        message_type: MessageType,
        pushkey: &str,
    ) -> Result<Vec<Message>> {
        let request = PushRequest::new(pushkey, text)
            .with_desp(desp)
            .with_type(message_type);
        let rejection = self
            .call_settled(ApiOperation::MessagePush, self.api.message_push(&request))
            .await?;

        self.fetch_after(rejection).await
    }

    /// [`push_message`](Self::push_message) with the default markdown type.
    pub async fn push_markdown(
        &self,
        text: &str,
        desp: &str,
        pushkey: &str,
    ) -> Result<Vec<Message>> {
        self.push_message(text, desp, MessageType::Markdown, pushkey)
            .await
    }

    /// Fetches the message history and appends it to the message store.
    ///
    /// Batches are inserted whole; history that overlaps an earlier fetch is
    /// inserted again.
    pub async fn fetch_messages(&self) -> Result<Vec<Message>> {
        let operation = ApiOperation::MessageList;
        let token = self.state.token();
        let messages = self
            .call(operation, self.api.message_list(&token))
            .await?
            .messages;

        self.messages
            .insert(&messages)
            .await
            .map_err(|err| self.report(operation.as_str(), err))?;
        tracing::debug!("Stored {} messages", messages.len());
        Ok(messages)
    }

    /// Deletes a message on the server, then pulls the history whether or
    /// not the deletion was accepted. Only a transport failure skips the pull.
    pub async fn remove_message(&self, message_id: i64) -> Result<Vec<Message>> {
        let token = self.state.token();
        let rejection = self
            .call_settled(
                ApiOperation::MessageRemove,
                self.api.message_remove(&token, message_id),
            )
            .await?;

        self.fetch_after(rejection).await
    }

    async fn fetch_after(&self, rejection: Option<PushDeerError>) -> Result<Vec<Message>> {
        let fetched = self.fetch_messages().await;
        match rejection {
            Some(err) => Err(err),
            None => fetched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{Fixture, key, message};
    use pushdeer_core::api::ApiOperation;
    use pushdeer_core::error::PushDeerError;
    use pushdeer_core::message::MessageType;
    use pushdeer_core::testing::{BAD_ARGUMENT_CODE, FakePushDeerApi};

    #[tokio::test]
    async fn test_push_then_fetch_history() {
        let fixture = Fixture::signed_in(FakePushDeerApi::new().with_keys(vec![key("1")])).await;

        let history = fixture
            .orchestrator
            .push_message("build failed", "see log", MessageType::Text, &key("1").key)
            .await
            .unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].text, "build failed");
        assert_eq!(history[0].desp, "see log");
        assert_eq!(history[0].message_type, MessageType::Text);
        assert_eq!(history[0].pushkey_name.as_deref(), Some("key-1"));
        assert_eq!(fixture.messages.batches(), vec![history]);
        assert_eq!(
            fixture.api.calls(),
            vec![ApiOperation::MessagePush, ApiOperation::MessageList]
        );
    }

    #[tokio::test]
    async fn test_push_markdown_defaults_type() {
        let fixture = Fixture::signed_in(FakePushDeerApi::new().with_keys(vec![key("1")])).await;

        let history = fixture
            .orchestrator
            .push_markdown("# hello", "", &key("1").key)
            .await
            .unwrap();

        assert_eq!(history[0].message_type, MessageType::Markdown);
    }

    #[tokio::test]
    async fn test_push_with_unknown_key_still_fetches() {
        let fixture =
            Fixture::signed_in(FakePushDeerApi::new().with_messages(vec![message(1, "a")])).await;

        let err = fixture
            .orchestrator
            .push_markdown("hi", "", "PDU-unknown")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            PushDeerError::service(BAD_ARGUMENT_CODE, "pushkey not found")
        );
        assert_eq!(fixture.messages.batches(), vec![vec![message(1, "a")]]);
        assert_eq!(fixture.log.error_entries(), vec!["messagePush".to_string()]);
    }

    #[tokio::test]
    async fn test_push_transport_failure_skips_fetch() {
        let fixture = Fixture::signed_in(FakePushDeerApi::new().with_keys(vec![key("1")])).await;
        fixture
            .api
            .fail(ApiOperation::MessagePush, PushDeerError::transport("offline"));

        assert!(fixture.orchestrator.push_markdown("hi", "", &key("1").key).await.is_err());

        assert_eq!(fixture.api.calls(), vec![ApiOperation::MessagePush]);
        assert!(fixture.messages.batches().is_empty());
    }

    #[tokio::test]
    async fn test_overlapping_fetches_insert_both_batches() {
        let fixture = Fixture::signed_in(
            FakePushDeerApi::new().with_messages(vec![message(1, "a"), message(2, "b")]),
        )
        .await;

        fixture.orchestrator.fetch_messages().await.unwrap();
        fixture.orchestrator.fetch_messages().await.unwrap();

        let batches = fixture.messages.batches();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0], batches[1]);
        assert_eq!(batches[0], vec![message(1, "a"), message(2, "b")]);
    }

    #[tokio::test]
    async fn test_fetch_failure_inserts_nothing() {
        let fixture =
            Fixture::signed_in(FakePushDeerApi::new().with_messages(vec![message(1, "a")])).await;
        fixture
            .api
            .fail(ApiOperation::MessageList, PushDeerError::transport("offline"));

        assert!(fixture.orchestrator.fetch_messages().await.is_err());

        assert!(fixture.messages.batches().is_empty());
        assert_eq!(fixture.log.error_entries(), vec!["messageList".to_string()]);
    }

    #[tokio::test]
    async fn test_remove_message_refetches_without_clearing_store() {
        let fixture = Fixture::signed_in(
            FakePushDeerApi::new().with_messages(vec![message(1, "a"), message(2, "b")]),
        )
        .await;
        fixture.orchestrator.fetch_messages().await.unwrap();

        let history = fixture.orchestrator.remove_message(1).await.unwrap();

        assert_eq!(history, vec![message(2, "b")]);
        // Removal is remote only; local history is append-only.
        let batches = fixture.messages.batches();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].len(), 2);
    }

    #[tokio::test]
    async fn test_rejected_removal_still_refreshes() {
        let fixture =
            Fixture::signed_in(FakePushDeerApi::new().with_messages(vec![message(1, "a")])).await;

        let err = fixture.orchestrator.remove_message(7).await.unwrap_err();

        assert_eq!(
            err,
            PushDeerError::service(BAD_ARGUMENT_CODE, "message not found")
        );
        assert_eq!(
            fixture.api.calls(),
            vec![ApiOperation::MessageRemove, ApiOperation::MessageList]
        );
        assert_eq!(fixture.messages.batches(), vec![vec![message(1, "a")]]);
        assert_eq!(fixture.log.error_entries(), vec!["messageRemove".to_string()]);
    }

    #[tokio::test]
    async fn test_removal_transport_failure_skips_refresh() {
        let fixture = Fixture::signed_in(FakePushDeerApi::new()).await;
        fixture
            .api
            .fail(ApiOperation::MessageRemove, PushDeerError::transport("offline"));

        assert!(fixture.orchestrator.remove_message(1).await.is_err());

        assert_eq!(fixture.api.calls(), vec![ApiOperation::MessageRemove]);
        assert!(fixture.messages.batches().is_empty());
    }
}
