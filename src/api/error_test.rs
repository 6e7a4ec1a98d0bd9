//! Tests for Planfix API error types.

use crate::api::error::describe_failure;
use crate::api::{ApiError, ApiResult};

#[test]
fn auth_error_displays_correctly() {
    let err = ApiError::Auth {
        message: "invalid API credentials".to_string(),
    };
    assert_eq!(err.to_string(), "Authentication error: invalid API credentials");
}

#[test]
fn validation_error_displays_correctly() {
    let err = ApiError::validation("Expected key 'task' not found in response");
    assert_eq!(
        err.to_string(),
        "Validation error: Expected key 'task' not found in response"
    );
}

#[test]
fn api_error_displays_bare_message() {
    let err = ApiError::api("HTTP 500: boom");
    assert_eq!(err.to_string(), "HTTP 500: boom");
}

#[test]
fn status_mapping_is_total() {
    assert!(matches!(
        ApiError::from_status(401, "task/1", ""),
        ApiError::Auth { .. }
    ));
    assert!(matches!(
        ApiError::from_status(403, "task/1", ""),
        ApiError::Auth { .. }
    ));
    assert!(matches!(
        ApiError::from_status(404, "task/1", ""),
        ApiError::NotFound { .. }
    ));
    assert_eq!(
        ApiError::from_status(500, "task/1", "oops"),
        ApiError::Api {
            status: Some(500),
            message: "HTTP 500: oops".to_string()
        }
    );
}

#[test]
fn not_found_names_the_path() {
    let err = ApiError::from_status(404, "contact/99", "");
    assert_eq!(err.to_string(), "Not found: resource 'contact/99' not found");
}

#[test]
fn failure_envelope_is_preferred() {
    let body = r#"{"result":"fail","code":8000,"error":"Invalid filter"}"#;
    assert_eq!(describe_failure(400, body), "API Error 8000: Invalid filter");
}

#[test]
fn failure_envelope_without_code() {
    let body = r#"{"result":"fail","error":"Broken"}"#;
    assert_eq!(describe_failure(400, body), "API Error unknown: Broken");
}

#[test]
fn message_field_used_when_not_an_envelope() {
    let body = r#"{"result":"ok","message":"Rate limited"}"#;
    assert_eq!(describe_failure(429, body), "HTTP 429: Rate limited");

    let body = r#"{"error":"Bad gateway"}"#;
    assert_eq!(describe_failure(502, body), "HTTP 502: Bad gateway");
}

#[test]
fn raw_text_used_for_non_json_body() {
    assert_eq!(
        describe_failure(503, "Service Unavailable"),
        "HTTP 503: Service Unavailable"
    );
}

#[test]
fn api_result_alias_works() {
    fn fails() -> ApiResult<()> {
        Err(ApiError::validation("bad"))
    }
    assert!(fails().is_err());
}
