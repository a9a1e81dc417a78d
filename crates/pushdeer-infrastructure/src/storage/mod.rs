//! File storage primitives shared by the file-backed repositories.

mod atomic_file;

pub use atomic_file::{AtomicFile, FileFormat, StorageError};

use pushdeer_core::{PushDeerError, Result};

/// Runs file work on tokio's blocking thread pool.
pub(crate) async fn run_blocking<R, F>(work: F) -> Result<R>
where
    F: FnOnce() -> std::result::Result<R, StorageError> + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| PushDeerError::internal(format!("Failed to join storage task: {}", e)))?
        .map_err(PushDeerError::from)
}
