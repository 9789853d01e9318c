//! Error taxonomy for the HTTP boundary.
//!
//! Every backend failure is classified into one of these variants at the
//! gateway so the service layer only ever deals with this taxonomy.

use serde::Deserialize;
use thiserror::Error;

/// Substring the backend uses in 400 responses for unique-field conflicts.
const DUPLICATE_MARKER: &str = "already exists";

/// One field-level issue from a backend validation response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FieldIssue {
    pub path: String,
    pub msg: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 401; the session cookie or token is no longer accepted.
    #[error("session expired, please sign in again")]
    AuthExpired,

    /// HTTP 400 carrying the backend's "already exists" message.
    #[error("{0}")]
    Duplicate(String),

    /// HTTP 400 carrying a structured `{ errors: [{path, msg}] }` body.
    #[error("the server rejected the submitted fields")]
    Validation(Vec<FieldIssue>),

    /// Any other non-2xx response.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Transport-level failure (DNS, refused connection, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// 2xx response whose body did not match the expected envelope.
    #[error("malformed response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[serde(default)]
    errors: Vec<FieldIssue>,
}

/// Classifies a non-2xx response into the [`ApiError`] taxonomy.
pub fn classify_response(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::AuthExpired;
    }

    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();

    if status == 400 {
        if let Some(parsed) = &parsed {
            if let Some(message) = &parsed.message {
                if message.to_lowercase().contains(DUPLICATE_MARKER) {
                    return ApiError::Duplicate(message.clone());
                }
            }
            if !parsed.errors.is_empty() {
                return ApiError::Validation(parsed.errors.clone());
            }
        }
    }

    let message = parsed
        .and_then(|p| p.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "Something went wrong".to_string());

    ApiError::Server { status, message }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_auth_expired() {
        assert!(matches!(classify_response(401, ""), ApiError::AuthExpired));
    }

    #[test]
    fn duplicate_message_is_recognized() {
        let body = r#"{"message": "Asset model already exists"}"#;
        match classify_response(400, body) {
            ApiError::Duplicate(msg) => assert_eq!(msg, "Asset model already exists"),
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn structured_errors_map_to_validation() {
        let body = r#"{"errors": [{"path": "email", "msg": "Invalid email"}]}"#;
        match classify_response(400, body) {
            ApiError::Validation(issues) => {
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].path, "email");
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn other_failures_keep_the_server_message() {
        let body = r#"{"message": "boom"}"#;
        match classify_response(500, body) {
            ApiError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn unparseable_body_falls_back_to_generic_message() {
        match classify_response(502, "<html>bad gateway</html>") {
            ApiError::Server { message, .. } => assert_eq!(message, "Something went wrong"),
            other => panic!("unexpected classification: {other:?}"),
        }
    }
}
