//! MCP tools for Planfix tasks.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{Checks, IdInput, error_result, render_list, text_result};
use crate::api::TaskQuery;
use crate::mcp::PlanfixMcpServer;
use crate::mcp::format::{format_error, to_pretty_json};
use crate::mcp::pagination::PageParams;
use crate::models::StatusFilter;

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListTasksParams {
    #[schemars(description = "Only tasks of this project")]
    pub project_id: Option<IdInput>,
    #[schemars(description = "Only tasks assigned to this user (numeric user id)")]
    pub assignee_id: Option<IdInput>,
    #[schemars(description = "Task status: 'active' (default), 'completed' or 'all'")]
    pub status: Option<String>,
    #[schemars(description = "Comma-separated list of fields to return (optional)")]
    pub fields: Option<String>,
    #[serde(flatten)]
    pub page: PageParams,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchTasksParams {
    #[schemars(description = "Text to look for in task names (optional)")]
    pub query: Option<String>,
    #[schemars(description = "Only tasks of this project")]
    pub project_id: Option<IdInput>,
    #[schemars(description = "Only tasks assigned to this user (numeric user id)")]
    pub assignee_id: Option<IdInput>,
    #[schemars(description = "Task status: 'active' (default), 'completed' or 'all'")]
    pub status: Option<String>,
    #[schemars(description = "Comma-separated list of fields to return (optional)")]
    pub fields: Option<String>,
    #[serde(flatten)]
    pub page: PageParams,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetTaskParams {
    #[schemars(description = "Task ID")]
    pub task_id: IdInput,
    #[schemars(description = "Comma-separated list of fields to return (optional)")]
    pub fields: Option<String>,
}

// =============================================================================
// Task Tools
// =============================================================================

/// Filter labels shown in the listing footer.
fn task_filter_labels(query: &TaskQuery) -> Vec<String> {
    let mut labels = Vec::new();
    if let Some(name) = &query.name {
        labels.push(format!("query '{name}'"));
    }
    if let Some(project_id) = query.project_id {
        labels.push(format!("project {project_id}"));
    }
    if let Some(assignee_id) = query.assignee_id {
        labels.push(format!("assignee {assignee_id}"));
    }
    if query.status != StatusFilter::All {
        labels.push(format!("status {}", query.status));
    }
    labels
}

#[tool_router(router = task_tools, vis = "pub(crate)")]
impl PlanfixMcpServer {
    #[tool(
        description = "List Planfix tasks. Filter by project_id, assignee_id and status (active, completed, all). Supports offset/limit or page/limit pagination. Returns basic task fields; use get_task for one task."
    )]
    pub async fn list_tasks(
        &self,
        params: Parameters<ListTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut checks = Checks::new();
        let pagination = checks.page(&params.page);
        let project_id = checks.optional_id("project_id", params.project_id.as_ref());
        let assignee_id = checks.optional_id("assignee_id", params.assignee_id.as_ref());
        let status = checks.status(params.status.as_deref());
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        let query = TaskQuery {
            page: pagination.request(),
            project_id,
            assignee_id,
            status,
            name: None,
            fields: params.fields,
        };
        info!(
            status = %query.status,
            offset = pagination.offset,
            limit = pagination.limit,
            "list_tasks"
        );

        match self.client.list_tasks(&query).await {
            Ok(tasks) => {
                info!(count = tasks.len(), "Found tasks");
                text_result(render_list(
                    &tasks,
                    &pagination,
                    "tasks",
                    &task_filter_labels(&query),
                ))
            }
            Err(e) => {
                error!(error = %e, "Failed to list tasks");
                error_result(format_error(&e, "listing tasks"))
            }
        }
    }

    #[tool(
        description = "Search Planfix tasks by name. Without a query it filters by project, assignee and status only. Accepts the same filters and pagination as list_tasks."
    )]
    pub async fn search_tasks(
        &self,
        params: Parameters<SearchTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let text = params
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);
        let mut checks = Checks::new();
        let pagination = checks.page(&params.page);
        let project_id = checks.optional_id("project_id", params.project_id.as_ref());
        let assignee_id = checks.optional_id("assignee_id", params.assignee_id.as_ref());
        let status = checks.status(params.status.as_deref());
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        let filter = TaskQuery {
            page: pagination.request(),
            project_id,
            assignee_id,
            status,
            name: None,
            fields: params.fields,
        };
        info!(query = ?text, status = %status, "search_tasks");

        let found = match text.as_deref() {
            Some(text) => self.client.search_tasks(text, &filter).await,
            None => self.client.list_tasks(&filter).await,
        };
        match found {
            Ok(tasks) => {
                info!(count = tasks.len(), "Found tasks");
                let labels = task_filter_labels(&TaskQuery {
                    name: text,
                    ..filter
                });
                text_result(render_list(&tasks, &pagination, "tasks", &labels))
            }
            Err(e) => {
                error!(error = %e, "Failed to search tasks");
                error_result(format_error(&e, "searching tasks"))
            }
        }
    }

    #[tool(description = "Get one Planfix task by ID with its main fields.")]
    pub async fn get_task(
        &self,
        params: Parameters<GetTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut checks = Checks::new();
        let task_id = checks.id("task_id", &params.task_id);
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        info!(task_id, "get_task");
        match self.client.get_task(task_id, params.fields.as_deref()).await {
            Ok(task) => text_result(to_pretty_json(&task)),
            Err(e) => {
                error!(task_id, error = %e, "Failed to get task");
                error_result(format_error(&e, &format!("getting task {task_id}")))
            }
        }
    }
}

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;
