use serde::{Deserialize, Serialize};

use crate::FmpError;

/// Uniform success/error wrapper for machine-readable output.
///
/// Invariant, held by construction: `success == true` implies `data` is
/// present and `error` absent; `success == false` implies `error` and
/// `status` are present (status 500 when the failure carried no upstream
/// status). Endpoint methods return plain `Result`s; this wrapper exists for
/// the edges that need a serialized verdict, such as agent tool output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            status: None,
        }
    }

    pub fn fail(error: impl Into<String>, status: u16) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            status: Some(status),
        }
    }

    /// Converts back into a `Result` without losing the error message.
    pub fn into_result(self) -> Result<T, FmpError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => {
                let message = self.error.unwrap_or_else(|| "unknown error".to_owned());
                match self.status {
                    Some(status) => Err(FmpError::status(status, message)),
                    None => Err(FmpError::transport(message, false)),
                }
            }
        }
    }
}

impl<T> From<Result<T, FmpError>> for ApiEnvelope<T> {
    fn from(result: Result<T, FmpError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::fail(err.to_string(), err.status_code()),
        }
    }
}
