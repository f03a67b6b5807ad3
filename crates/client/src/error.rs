//! Error types for the client library

use thiserror::Error;

/// Errors surfaced by the API client and propagated unchanged by the
/// domain services
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx HTTP response
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured deadline
    #[error("Request timed out")]
    Timeout,

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Well-formed response that the client cannot act on
    #[error("Unexpected response: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// User-facing message; never empty
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status code, when the failure carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_never_empty() {
        let errors = [
            ApiError::Status {
                status: 404,
                message: "Not Found".to_string(),
            },
            ApiError::Network("connection refused".to_string()),
            ApiError::Timeout,
            ApiError::Decode("missing field".to_string()),
            ApiError::Unexpected("login rejected".to_string()),
        ];
        for error in errors {
            assert!(!error.message().is_empty());
        }
    }

    #[test]
    fn test_status_accessor() {
        let error = ApiError::Status {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(error.status(), Some(404));
        assert_eq!(ApiError::Timeout.status(), None);
    }
}
