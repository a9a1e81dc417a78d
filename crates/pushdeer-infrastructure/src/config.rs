//! Client configuration loaded from `config.toml`.
//!
//! ```toml
//! [storage]
//! settings_file = "/var/lib/pushdeer/settings.toml"
//! messages_file = "/var/lib/pushdeer/messages.json"
//!
//! [logging]
//! filter = "pushdeer=debug,info"
//! ```
//!
//! Every key is optional; a missing file yields the defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use pushdeer_core::{PushDeerError, Result};

use crate::paths::PushDeerPaths;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Locations of the file-backed collaborators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl ClientConfig {
    /// Loads the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads the configuration from the default location.
    pub fn load_default() -> Result<Self> {
        let path = PushDeerPaths::config_file()?;
        Self::load(&path)
    }

    /// Resolved settings file path (configured or default).
    pub fn settings_file(&self) -> Result<PathBuf> {
        match &self.storage.settings_file {
            Some(path) => Ok(path.clone()),
            None => PushDeerPaths::settings_file().map_err(PushDeerError::from),
        }
    }

    /// Resolved message history file path (configured or default).
    pub fn messages_file(&self) -> Result<PathBuf> {
        match &self.storage.messages_file {
            Some(path) => Ok(path.clone()),
            None => PushDeerPaths::messages_file().map_err(PushDeerError::from),
        }
    }
}
