//! JSON-file MessageRepository implementation.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

use pushdeer_core::Result;
use pushdeer_core::message::{Message, MessageRepository};

use crate::storage::{AtomicFile, FileFormat, run_blocking};

/// Append-only message history stored as a JSON array.
///
/// Batches are appended as-is: overlapping fetches produce duplicate
/// records, which readers are expected to tolerate.
pub struct JsonMessageRepository {
    file: Arc<AtomicFile<Vec<Message>>>,
}

impl JsonMessageRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Arc::new(AtomicFile::new(path.into(), FileFormat::Json)),
        }
    }
}

#[async_trait]
impl MessageRepository for JsonMessageRepository {
    async fn insert(&self, messages: &[Message]) -> Result<()> {
        if messages.is_empty() {
            return Ok(());
        }

        let file = Arc::clone(&self.file);
        let batch = messages.to_vec();
        let appended = batch.len();
        let total = run_blocking(move || {
            file.update(Vec::new(), move |stored| {
                stored.extend(batch);
                stored.len()
            })
        })
        .await?;
        tracing::debug!(
            "Appended {} messages to {} ({} stored)",
            appended,
            self.file.path().display(),
            total
        );
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Message>> {
        let file = Arc::clone(&self.file);
        Ok(run_blocking(move || file.load()).await?.unwrap_or_default())
    }
}
