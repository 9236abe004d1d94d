//! Error contract for gateway calls
//!
//! Every failure - transport or application - collapses into
//! [`ApiError::RequestFailed`] carrying a human-readable message.
//! Callers never need to distinguish sub-kinds.

use serde_json::Value;
use thiserror::Error;

/// Message used when neither the error body nor the status line has text
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

/// Uniform error for every gateway call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    RequestFailed(String),
}

impl ApiError {
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::RequestFailed(message.into())
    }

    /// The human-readable message carried by the error
    pub fn message(&self) -> &str {
        match self {
            Self::RequestFailed(message) => message,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(err.to_string())
    }
}

/// Pick the user-visible message for a failed response.
///
/// Precedence: `error` field, then `message` field, then the status text,
/// then [`GENERIC_FAILURE_MESSAGE`]. Only string fields count.
pub fn failure_message(body: &str, status_text: Option<&str>) -> String {
    let from_body = serde_json::from_str::<Value>(body).ok().and_then(|payload| {
        ["error", "message"].iter().find_map(|field| {
            payload
                .get(field)
                .and_then(Value::as_str)
                .map(str::to_string)
        })
    });

    from_body
        .or_else(|| {
            status_text
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_wins() {
        let body = r#"{"error": "title is required", "message": "ignored"}"#;
        assert_eq!(failure_message(body, Some("Bad Request")), "title is required");
    }

    #[test]
    fn test_message_field_used_without_error() {
        let body = r#"{"message": "Project not found"}"#;
        assert_eq!(failure_message(body, Some("Not Found")), "Project not found");
    }

    #[test]
    fn test_non_json_body_falls_back_to_status_text() {
        let body = "<html><body>Internal Server Error</body></html>";
        assert_eq!(
            failure_message(body, Some("Internal Server Error")),
            "Internal Server Error"
        );
    }

    #[test]
    fn test_json_without_known_fields_falls_back_to_status_text() {
        assert_eq!(failure_message(r#"{"detail": "x"}"#, Some("Conflict")), "Conflict");
    }

    #[test]
    fn test_non_string_error_field_is_skipped() {
        let body = r#"{"error": {"code": 7}, "message": "nested"}"#;
        assert_eq!(failure_message(body, None), "nested");
    }

    #[test]
    fn test_generic_message_when_nothing_available() {
        assert_eq!(failure_message("", None), GENERIC_FAILURE_MESSAGE);
        assert_eq!(failure_message("", Some("")), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_display_is_the_bare_message() {
        let err = ApiError::request_failed("offline");
        assert_eq!(err.to_string(), "offline");
        assert_eq!(err.message(), "offline");
    }
}
