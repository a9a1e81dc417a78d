//! Error types for the PushDeer client core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for every PushDeer crate.
///
/// Transport and service failures are the kinds the orchestrator expects to
/// see at runtime; the remaining variants come from the local collaborators
/// (settings, message storage, configuration).
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PushDeerError {
    /// The request never produced a service response (network, decoding, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success code
    #[error("Service error {code}: {message}")]
    Service { code: i64, message: String },

    /// The service answered with success but without the payload the operation consumes
    #[error("Missing content in '{operation}' response")]
    MissingContent { operation: String },

    /// Settings store error (token / device identity persistence)
    #[error("Settings error: {0}")]
    Settings(String),

    /// Durable storage error (message store)
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PushDeerError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Service error from a response code and message
    pub fn service(code: i64, message: impl Into<String>) -> Self {
        Self::Service {
            code,
            message: message.into(),
        }
    }

    /// Creates a MissingContent error for the named operation
    pub fn missing_content(operation: impl Into<String>) -> Self {
        Self::MissingContent {
            operation: operation.into(),
        }
    }

    /// Creates a Settings error
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a Service error
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    /// Check if the failure came from the remote side (transport, service
    /// rejection, or an empty payload).
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Service { .. } | Self::MissingContent { .. }
        )
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for PushDeerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for PushDeerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for PushDeerError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for PushDeerError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from String (for error messages)
impl From<String> for PushDeerError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, PushDeerError>`.
pub type Result<T> = std::result::Result<T, PushDeerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_classification() {
        assert!(PushDeerError::transport("timeout").is_remote());
        assert!(PushDeerError::service(80403, "bad token").is_remote());
        assert!(PushDeerError::missing_content("deviceList").is_remote());
        assert!(!PushDeerError::settings("read-only").is_remote());
        assert!(!PushDeerError::storage("disk full").is_remote());
    }

    #[test]
    fn test_display_includes_code() {
        let err = PushDeerError::service(80501, "pushkey not found");
        assert_eq!(err.to_string(), "Service error 80501: pushkey not found");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<Vec<i32>>("{").unwrap_err();
        let err: PushDeerError = parse.into();
        assert!(err.is_serialization());
    }
}
