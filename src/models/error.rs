use serde::{Deserialize, Serialize};

/// Failure envelope Planfix returns alongside 4xx/5xx statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponseError {
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponseError {
    pub fn is_failure(&self) -> bool {
        self.result == "fail"
    }
}
