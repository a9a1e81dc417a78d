//! Message repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::message::model::Message;

/// Durable, insert-only store for message history.
///
/// Callers only ever append. Deduplication of overlapping batches is left to
/// the implementation.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Appends a batch of messages.
    async fn insert(&self, messages: &[Message]) -> Result<()>;

    /// Returns every stored message in insertion order.
    async fn list_all(&self) -> Result<Vec<Message>>;
}
