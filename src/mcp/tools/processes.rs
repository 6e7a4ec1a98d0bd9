//! MCP tool for Planfix task processes.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{Checks, error_result, render_list, text_result};
use crate::mcp::PlanfixMcpServer;
use crate::mcp::format::format_error;
use crate::mcp::pagination::PageParams;

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListProcessesParams {
    #[serde(flatten)]
    pub page: PageParams,
}

#[tool_router(router = process_tools, vis = "pub(crate)")]
impl PlanfixMcpServer {
    #[tool(
        description = "List Planfix task processes (workflows). Supports offset/limit or page/limit pagination."
    )]
    pub async fn list_processes(
        &self,
        params: Parameters<ListProcessesParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut checks = Checks::new();
        let pagination = checks.page(&params.0.page);
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        info!(offset = pagination.offset, limit = pagination.limit, "list_processes");
        match self.client.list_processes(pagination.request()).await {
            Ok(processes) => {
                info!(count = processes.len(), "Found processes");
                text_result(render_list(&processes, &pagination, "processes", &[]))
            }
            Err(e) => {
                error!(error = %e, "Failed to list processes");
                error_result(format_error(&e, "listing processes"))
            }
        }
    }
}

#[cfg(test)]
#[path = "processes_test.rs"]
mod processes_test;
