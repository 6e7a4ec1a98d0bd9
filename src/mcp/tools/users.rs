//! MCP tools for Planfix employees.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{Checks, IdInput, error_result, render_list, text_result};
use crate::mcp::PlanfixMcpServer;
use crate::mcp::format::{format_error, to_pretty_json};
use crate::mcp::pagination::PageParams;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetUserParams {
    #[schemars(description = "User ID, either numeric (5) or prefixed ('user:5')")]
    pub user_id: IdInput,
    #[schemars(description = "Comma-separated list of fields to return (optional)")]
    pub fields: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListEmployeesParams {
    #[serde(flatten)]
    pub page: PageParams,
}

/// Accepts `5`, `"5"` and `"user:5"`; the prefix is kept for the request path.
fn user_id(checks: &mut Checks, value: &IdInput) -> String {
    if let IdInput::Text(text) = value {
        let text = text.trim();
        if let Some(number) = text.strip_prefix("user:") {
            if number.parse::<i64>().is_ok_and(|id| id >= 1) {
                return text.to_string();
            }
            checks.push(format!("user_id must be a positive integer or 'user:<id>' (got '{text}')"));
            return String::new();
        }
    }
    checks.id("user_id", value).to_string()
}

#[tool_router(router = user_tools, vis = "pub(crate)")]
impl PlanfixMcpServer {
    #[tool(description = "Get one Planfix employee by ID.")]
    pub async fn get_user(
        &self,
        params: Parameters<GetUserParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut checks = Checks::new();
        let user_id = user_id(&mut checks, &params.user_id);
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        info!(%user_id, "get_user");
        match self.client.get_user(&user_id, params.fields.as_deref()).await {
            Ok(user) => text_result(to_pretty_json(&user)),
            Err(e) => {
                error!(%user_id, error = %e, "Failed to get user");
                error_result(format_error(&e, &format!("getting user {user_id}")))
            }
        }
    }

    #[tool(
        description = "List Planfix employees with name, email and position. Supports offset/limit or page/limit pagination."
    )]
    pub async fn list_employees(
        &self,
        params: Parameters<ListEmployeesParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut checks = Checks::new();
        let pagination = checks.page(&params.0.page);
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        info!(offset = pagination.offset, limit = pagination.limit, "list_employees");
        match self.client.list_employees(pagination.request()).await {
            Ok(users) => {
                info!(count = users.len(), "Found employees");
                text_result(render_list(&users, &pagination, "employees", &[]))
            }
            Err(e) => {
                error!(error = %e, "Failed to list employees");
                error_result(format_error(&e, "listing employees"))
            }
        }
    }
}

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;
