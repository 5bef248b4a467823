use thiserror::Error;

/// Unified error type for client operations.
///
/// Every failure a call can produce collapses into one of these variants so
/// callers (and the envelope layer) can recover an HTTP status and a
/// retryability hint without inspecting message strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FmpError {
    /// No API key was configured and `FMP_API_KEY` is unset.
    #[error("no API key configured; set FMP_API_KEY or use the builder")]
    MissingApiKey,

    /// Request-side validation failed before any network call.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network-level failure (DNS, connect, timeout, body read).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        /// Whether the failure class is worth retrying.
        retryable: bool,
    },

    /// The vendor answered with a non-2xx status.
    #[error("upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The vendor body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A single-item lookup came back empty.
    #[error("not found: {what}")]
    NotFound { what: String },
}

impl FmpError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn transport(message: impl Into<String>, retryable: bool) -> Self {
        Self::Transport {
            message: message.into(),
            retryable,
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// The HTTP status to surface in envelopes. Failures without an upstream
    /// status report 500, validation failures 400, missing lookups 404.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MissingApiKey | Self::InvalidRequest(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Status { status, .. } => *status,
            Self::Transport { .. } | Self::Decode(_) => 500,
        }
    }

    /// Whether a retry has any chance of succeeding.
    pub const fn retryable(&self) -> bool {
        match self {
            Self::Transport { retryable, .. } => *retryable,
            Self::Status { status, .. } => {
                matches!(*status, 408 | 429) || *status >= 500
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_defaults_to_500_without_upstream_status() {
        assert_eq!(FmpError::transport("boom", true).status_code(), 500);
        assert_eq!(FmpError::decode("bad json").status_code(), 500);
    }

    #[test]
    fn status_code_reflects_upstream_status() {
        assert_eq!(FmpError::status(403, "forbidden").status_code(), 403);
        assert_eq!(FmpError::not_found("quote for AAPL").status_code(), 404);
        assert_eq!(FmpError::invalid_request("empty symbol").status_code(), 400);
    }

    #[test]
    fn retryability_follows_error_class() {
        assert!(FmpError::transport("timeout", true).retryable());
        assert!(!FmpError::transport("tls handshake", false).retryable());
        assert!(FmpError::status(429, "rate limited").retryable());
        assert!(FmpError::status(503, "unavailable").retryable());
        assert!(!FmpError::status(401, "bad key").retryable());
        assert!(!FmpError::invalid_request("nope").retryable());
    }
}
