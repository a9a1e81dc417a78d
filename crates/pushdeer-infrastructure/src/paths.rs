//! Unified path management for PushDeer client files.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for pushdeer_core::PushDeerError {
    fn from(err: PathError) -> Self {
        pushdeer_core::PushDeerError::config(err.to_string())
    }
}

/// Default locations of the client's files.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/pushdeer/          # Config directory (platform dependent)
/// ├── config.toml              # Client configuration
/// ├── settings.toml            # Session token and device identity
/// └── messages.json            # Message history
/// ```
pub struct PushDeerPaths;

impl PushDeerPaths {
    /// Returns the pushdeer configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("pushdeer"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default path of the settings file.
    pub fn settings_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("settings.toml"))
    }

    /// Returns the default path of the message history file.
    pub fn messages_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("messages.json"))
    }
}
