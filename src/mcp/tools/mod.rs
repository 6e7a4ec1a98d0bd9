//! Read-only MCP tools.
//!
//! One file per Planfix entity. Each contributes a named tool router on
//! [`PlanfixMcpServer`](super::PlanfixMcpServer); the server adds them up.
//! Input checks run before any network call and every failure is returned
//! to the host as text.

mod comments;
mod contacts;
mod files;
mod processes;
mod projects;
mod reports;
mod tasks;
mod users;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
    schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};

use crate::models::StatusFilter;

use super::format::to_pretty_json;
use super::pagination::{PageParams, Pagination};

pub use comments::{GetCommentParams, ListCommentsParams};
pub use contacts::{GetContactDetailsParams, ListContactsParams, SearchContactsParams};
pub use files::{GetFileParams, ListFilesParams};
pub use processes::ListProcessesParams;
pub use projects::{GetProjectParams, ListProjectsParams};
pub use reports::ListReportsParams;
pub use tasks::{GetTaskParams, ListTasksParams, SearchTasksParams};
pub use users::{GetUserParams, ListEmployeesParams};

/// Identifier as sent by the host: a number, or a string that should hold one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum IdInput {
    Number(i64),
    Text(String),
}

impl From<i64> for IdInput {
    fn from(id: i64) -> Self {
        IdInput::Number(id)
    }
}

impl From<&str> for IdInput {
    fn from(id: &str) -> Self {
        IdInput::Text(id.to_string())
    }
}

/// Collects every input problem of one tool call.
#[derive(Debug, Default)]
pub(crate) struct Checks {
    errors: Vec<String>,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&mut self, params: &PageParams) -> Pagination {
        Pagination::resolve(params, &mut self.errors)
    }

    /// Positive integer id. Returns 0 after recording an error.
    pub fn id(&mut self, field: &str, value: &IdInput) -> i64 {
        let parsed = match value {
            IdInput::Number(id) => Some(*id),
            IdInput::Text(text) => text.trim().parse::<i64>().ok(),
        };
        match parsed {
            Some(id) if id >= 1 => id,
            _ => {
                let shown = match value {
                    IdInput::Number(id) => id.to_string(),
                    IdInput::Text(text) => format!("'{text}'"),
                };
                self.errors
                    .push(format!("{field} must be a positive integer (got {shown})"));
                0
            }
        }
    }

    pub fn optional_id(&mut self, field: &str, value: Option<&IdInput>) -> Option<i64> {
        value.map(|v| self.id(field, v))
    }

    /// Trimmed search text, which must not be empty.
    pub fn query(&mut self, value: &str) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.errors.push("query must not be empty".to_string());
        }
        trimmed.to_string()
    }

    pub fn status(&mut self, value: Option<&str>) -> StatusFilter {
        match value.map(str::trim) {
            None | Some("") => StatusFilter::default(),
            Some(raw) => raw.to_lowercase().parse().unwrap_or_else(|e: String| {
                self.errors.push(e);
                StatusFilter::default()
            }),
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// `Err` with the full message when anything was recorded.
    pub fn finish(self) -> Result<(), String> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(format!("Validation error: {}", self.errors.join("\n")))
        }
    }
}

pub(crate) fn text_result(text: impl Into<String>) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Failure reported to the host as a tool error carrying text.
pub(crate) fn error_result(text: impl Into<String>) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::error(vec![Content::text(text.into())]))
}

/// Pretty JSON array followed by the pagination footer.
pub(crate) fn render_list<T: Serialize>(
    items: &[T],
    pagination: &Pagination,
    noun: &str,
    filters: &[String],
) -> String {
    format!(
        "{}\n\n{}",
        to_pretty_json(items),
        pagination.footer(items.len(), noun, filters)
    )
}
