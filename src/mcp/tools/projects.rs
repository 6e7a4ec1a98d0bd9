//! MCP tools for Planfix projects.

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
pub struct GetProjectParams {
    #[schemars(description = "Project ID")]
    pub project_id: IdInput,
    #[schemars(description = "Comma-separated list of fields to return (optional)")]
    pub fields: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListProjectsParams {
    #[serde(flatten)]
    pub page: PageParams,
}

#[tool_router(router = project_tools, vis = "pub(crate)")]
impl PlanfixMcpServer {
    #[tool(description = "Get one Planfix project by ID.")]
    pub async fn get_project(
        &self,
        params: Parameters<GetProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut checks = Checks::new();
        let project_id = checks.id("project_id", &params.project_id);
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        info!(project_id, "get_project");
        match self
            .client
            .get_project(project_id, params.fields.as_deref())
            .await
        {
            Ok(project) => text_result(to_pretty_json(&project)),
            Err(e) => {
                error!(project_id, error = %e, "Failed to get project");
                error_result(format_error(&e, &format!("getting project {project_id}")))
            }
        }
    }

    #[tool(
        description = "List Planfix projects with owner, client and dates. Supports offset/limit or page/limit pagination."
    )]
    pub async fn list_projects(
        &self,
        params: Parameters<ListProjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut checks = Checks::new();
        let pagination = checks.page(&params.0.page);
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        info!(offset = pagination.offset, limit = pagination.limit, "list_projects");
        match self.client.list_projects(pagination.request()).await {
            Ok(projects) => {
                info!(count = projects.len(), "Found projects");
                text_result(render_list(&projects, &pagination, "projects", &[]))
            }
            Err(e) => {
                error!(error = %e, "Failed to list projects");
                error_result(format_error(&e, "listing projects"))
            }
        }
    }
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;
