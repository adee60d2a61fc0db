//! Client Error Types
//!
//! Errors raised while talking to the Mindi backend, plus the local
//! presence checks that abort an action before any request is made.

use thiserror::Error;

/// Failure of a single backend request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Session missing or expired (HTTP 401)
    #[error("Authentication required")]
    Unauthorized,

    /// Backend answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the JSON we expected
    #[error("Parse error: {0}")]
    Decode(String),

    /// Request could not be built (body serialization)
    #[error("Request build error: {0}")]
    Request(String),
}

impl ClientError {
    /// Build an error from a non-2xx status and the raw response body.
    ///
    /// The backend reports failures as `{"error": "..."}`; anything else is
    /// kept verbatim for the diagnostic log.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return ClientError::Unauthorized;
        }

        #[derive(serde::Deserialize)]
        struct ErrorBody {
            error: String,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    "Unknown error".to_string()
                } else {
                    body.trim().to_string()
                }
            });

        ClientError::Status { status, message }
    }

    /// Whether this failure should send the browser back to the login route
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }
}

/// Result type for backend operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Presence checks performed before a submission
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a mood first")]
    NoMoodSelected,

    #[error("Please write something first")]
    EmptyJournal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_is_unauthorized() {
        let err = ClientError::from_status(401, r#"{"error": "Authentication required"}"#);
        assert_eq!(err, ClientError::Unauthorized);
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_error_body_message_extracted() {
        let err = ClientError::from_status(500, r#"{"error": "Failed to add mood"}"#);
        assert_eq!(
            err,
            ClientError::Status {
                status: 500,
                message: "Failed to add mood".to_string()
            }
        );
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_non_json_body_kept_verbatim() {
        let err = ClientError::from_status(502, "Bad Gateway\n");
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");

        let empty = ClientError::from_status(503, "");
        assert_eq!(empty.to_string(), "HTTP 503: Unknown error");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::NoMoodSelected.to_string(),
            "Please select a mood first"
        );
        assert_eq!(
            ValidationError::EmptyJournal.to_string(),
            "Please write something first"
        );
    }
}
