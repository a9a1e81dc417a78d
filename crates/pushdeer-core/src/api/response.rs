use serde::{Deserialize, Serialize};

use crate::api::operation::ApiOperation;
use crate::error::{PushDeerError, Result};

/// Response code the service uses for success.
pub const SUCCESS_CODE: i64 = 0;

/// Envelope wrapping every service response.
///
/// A success carries `code == 0` and, for most endpoints, a `content`
/// payload. Failures carry a non-zero code and an `error` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub code: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response with a payload.
    pub fn ok(content: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            error: None,
            content: Some(content),
        }
    }

    /// Successful response without a payload.
    pub fn empty() -> Self {
        Self {
            code: SUCCESS_CODE,
            error: None,
            content: None,
        }
    }

    /// Rejected response.
    pub fn failed(code: i64, error: impl Into<String>) -> Self {
        Self {
            code,
            error: Some(error.into()),
            content: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Extracts the payload of a successful response.
    ///
    /// # Errors
    ///
    /// - `Service` if the code is not [`SUCCESS_CODE`]
    /// - `MissingContent` if the response succeeded without a payload
    pub fn into_content(self, operation: ApiOperation) -> Result<T> {
        match self.into_ack()? {
            Some(content) => Ok(content),
            None => Err(PushDeerError::missing_content(operation.as_str())),
        }
    }

    /// Checks the response code only, for operations whose payload is ignored.
    pub fn into_ack(self) -> Result<Option<T>> {
        if !self.is_success() {
            return Err(PushDeerError::service(
                self.code,
                self.error.unwrap_or_default(),
            ));
        }
        Ok(self.content)
    }
}

/// `content` of the login exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenOnly {
    pub token: String,
}

/// `content` of mutation endpoints (rename/remove/regen).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionAck {
    #[serde(default)]
    pub message: String,
}

impl ActionAck {
    pub fn done() -> Self {
        Self {
            message: "done".to_string(),
        }
    }
}

/// `content` of the push endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushResult {
    #[serde(default)]
    pub result: Vec<String>,
}
