//! Planfix API error types.
//!
//! Every call either yields decoded JSON or one of four error kinds. The
//! transport maps HTTP statuses and network failures onto them; the
//! validation layer adds [`ApiError::Validation`].

use miette::Diagnostic;
use serde_json::Value;
use thiserror::Error;

use crate::models::ApiResponseError;

pub const TIMEOUT_MESSAGE: &str = "Request to Planfix API timed out";
pub const CONNECT_MESSAGE: &str = "Could not connect to Planfix API";

#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Authentication error: {message}")]
    #[diagnostic(
        code(planfix::api::auth),
        help("Check PLANFIX_API_KEY and the permissions granted to the token")
    )]
    Auth { message: String },

    #[error("Not found: {message}")]
    #[diagnostic(code(planfix::api::not_found))]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(planfix::api::validation))]
    Validation { message: String },

    #[error("{message}")]
    #[diagnostic(code(planfix::api::request))]
    Api {
        status: Option<u16>,
        message: String,
    },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        ApiError::Api {
            status: None,
            message: message.into(),
        }
    }

    /// Maps a non-success HTTP status and its body onto an error kind.
    pub fn from_status(status: u16, path: &str, body: &str) -> Self {
        match status {
            401 => ApiError::Auth {
                message: "invalid API credentials".to_string(),
            },
            403 => ApiError::Auth {
                message: "insufficient permissions".to_string(),
            },
            404 => ApiError::NotFound {
                message: format!("resource '{path}' not found"),
            },
            _ => ApiError::Api {
                status: Some(status),
                message: describe_failure(status, body),
            },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::api(TIMEOUT_MESSAGE)
        } else if e.is_connect() {
            ApiError::api(CONNECT_MESSAGE)
        } else {
            ApiError::api(format!("API request failed: {e}"))
        }
    }
}

/// Builds the message for a generic HTTP failure.
///
/// A `{"result": "fail", "code", "error"}` envelope wins; otherwise a
/// `message` or `error` string field; otherwise the raw body.
pub(crate) fn describe_failure(status: u16, body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return format!("HTTP {status}: {body}");
    };

    if let Ok(envelope) = serde_json::from_value::<ApiResponseError>(json.clone()) {
        if envelope.is_failure() {
            let code = envelope
                .code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            let error = envelope.error.as_deref().unwrap_or("no details");
            return format!("API Error {code}: {error}");
        }
    }

    let detail = json
        .get("message")
        .or_else(|| json.get("error"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| body.to_string());
    format!("HTTP {status}: {detail}")
}

/// Result type for Planfix API operations.
pub type ApiResult<T> = Result<T, ApiError>;
