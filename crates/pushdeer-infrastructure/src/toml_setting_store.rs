//! TOML-based SettingStore implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use pushdeer_core::Result;
use pushdeer_core::settings::SettingStore;

use crate::storage::{AtomicFile, FileFormat, run_blocking};

/// On-disk layout of `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredSettings {
    #[serde(default)]
    pub user_token: String,
    #[serde(default)]
    pub this_device_id: String,
}

/// Settings store backed by a single TOML file.
///
/// The file is read once on [`open`](Self::open) and cached; writes go
/// through the atomic file lock and refresh the cache.
pub struct TomlSettingStore {
    file: Arc<AtomicFile<StoredSettings>>,
    cache: RwLock<StoredSettings>,
}

impl TomlSettingStore {
    /// Opens (or creates) the settings file at `path`.
    ///
    /// A device identity is generated and persisted the first time the file
    /// is opened without one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or written.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let file = AtomicFile::new(path.into(), FileFormat::Toml);

        let settings = file.update(StoredSettings::default(), |settings| {
            if settings.this_device_id.is_empty() {
                settings.this_device_id = uuid::Uuid::new_v4().to_string();
                tracing::info!(
                    "Generated device identity {}",
                    settings.this_device_id
                );
            }
            settings.clone()
        })?;

        Ok(Self {
            file: Arc::new(file),
            cache: RwLock::new(settings),
        })
    }

    /// Returns a copy of the cached settings.
    pub async fn snapshot(&self) -> StoredSettings {
        self.cache.read().await.clone()
    }
}

#[async_trait]
impl SettingStore for TomlSettingStore {
    async fn user_token(&self) -> String {
        self.cache.read().await.user_token.clone()
    }

    async fn set_user_token(&self, token: &str) -> Result<()> {
        let current = self.cache.read().await.clone();
        let file = Arc::clone(&self.file);
        let token = token.to_string();

        // Persist first; the cache only changes once the file has.
        let updated = run_blocking(move || {
            file.update(current, |settings| {
                settings.user_token = token;
                settings.clone()
            })
        })
        .await?;

        *self.cache.write().await = updated;
        tracing::debug!("Persisted user token to {}", self.file.path().display());
        Ok(())
    }

    async fn this_device_id(&self) -> String {
        self.cache.read().await.this_device_id.clone()
    }
}
