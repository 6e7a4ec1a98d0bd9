//! MCP tools for Planfix files.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{Checks, IdInput, error_result, render_list, text_result};
use crate::api::FileQuery;
use crate::mcp::PlanfixMcpServer;
use crate::mcp::format::{format_error, to_pretty_json};
use crate::mcp::pagination::PageParams;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetFileParams {
    #[schemars(description = "File ID")]
    pub file_id: IdInput,
    #[schemars(description = "Comma-separated list of fields to return (optional)")]
    pub fields: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListFilesParams {
    #[schemars(description = "Files attached to this task")]
    pub task_id: Option<IdInput>,
    #[schemars(description = "Files attached to this project")]
    pub project_id: Option<IdInput>,
    #[serde(flatten)]
    pub page: PageParams,
}

#[tool_router(router = file_tools, vis = "pub(crate)")]
impl PlanfixMcpServer {
    #[tool(description = "Get metadata of one Planfix file by ID (name, size, download URL).")]
    pub async fn get_file(
        &self,
        params: Parameters<GetFileParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut checks = Checks::new();
        let file_id = checks.id("file_id", &params.file_id);
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        info!(file_id, "get_file");
        match self.client.get_file(file_id, params.fields.as_deref()).await {
            Ok(file) => text_result(to_pretty_json(&file)),
            Err(e) => {
                error!(file_id, error = %e, "Failed to get file");
                error_result(format_error(&e, &format!("getting file {file_id}")))
            }
        }
    }

    #[tool(
        description = "List Planfix files, optionally only those of a task or project. Supports offset/limit or page/limit pagination."
    )]
    pub async fn list_files(
        &self,
        params: Parameters<ListFilesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut checks = Checks::new();
        let pagination = checks.page(&params.page);
        let task_id = checks.optional_id("task_id", params.task_id.as_ref());
        let project_id = checks.optional_id("project_id", params.project_id.as_ref());
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        let query = FileQuery {
            page: pagination.request(),
            task_id,
            project_id,
        };
        info!(?task_id, ?project_id, limit = pagination.limit, "list_files");

        let labels: Vec<String> = task_id
            .map(|id| format!("task {id}"))
            .into_iter()
            .chain(project_id.map(|id| format!("project {id}")))
            .collect();

        match self.client.list_files(&query).await {
            Ok(files) => {
                info!(count = files.len(), "Found files");
                text_result(render_list(&files, &pagination, "files", &labels))
            }
            Err(e) => {
                error!(error = %e, "Failed to list files");
                error_result(format_error(&e, "listing files"))
            }
        }
    }
}

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;
