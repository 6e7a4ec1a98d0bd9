//! Response validation.
//!
//! Planfix nests payloads under a type-named key (`"task"`, `"contacts"`, ...)
//! and occasionally under a generic `"data"` key, so the key is always passed
//! in by the caller.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use super::error::{ApiError, ApiResult};

/// Decodes the object stored under `key` into `T`.
pub fn parse_entity<T: DeserializeOwned>(payload: &Value, key: &str) -> ApiResult<T> {
    let item = lookup(payload, key)?;
    T::deserialize(item).map_err(|e| {
        error!(key, error = %e, "response validation failed");
        ApiError::validation(format!("Response validation failed for '{key}': {e}"))
    })
}

/// Decodes every element of the array stored under `key` into `T`.
pub fn parse_list<T: DeserializeOwned>(payload: &Value, key: &str) -> ApiResult<Vec<T>> {
    let items = lookup(payload, key)?
        .as_array()
        .ok_or_else(|| ApiError::validation(format!("Expected '{key}' to be a list")))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            T::deserialize(item).map_err(|e| {
                error!(key, index, error = %e, "list response validation failed");
                ApiError::validation(format!(
                    "List response validation failed for '{key}'[{index}]: {e}"
                ))
            })
        })
        .collect()
}

/// Decodes the whole payload into `T`, for responses with no nesting key.
pub fn parse_root<T: DeserializeOwned>(payload: &Value) -> ApiResult<T> {
    T::deserialize(payload).map_err(|e| {
        error!(error = %e, "response validation failed");
        ApiError::validation(format!("Response validation failed: {e}"))
    })
}

fn lookup<'a>(payload: &'a Value, key: &str) -> ApiResult<&'a Value> {
    payload
        .get(key)
        .ok_or_else(|| ApiError::validation(format!("Expected key '{key}' not found in response")))
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;
