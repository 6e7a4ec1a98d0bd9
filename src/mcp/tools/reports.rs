//! MCP tool for Planfix reports.

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
pub struct ListReportsParams {
    #[serde(flatten)]
    pub page: PageParams,
}

#[tool_router(router = report_tools, vis = "pub(crate)")]
impl PlanfixMcpServer {
    #[tool(
        description = "List the reports configured in Planfix. Supports offset/limit or page/limit pagination."
    )]
    pub async fn list_reports(
        &self,
        params: Parameters<ListReportsParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut checks = Checks::new();
        let pagination = checks.page(&params.0.page);
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        info!(offset = pagination.offset, limit = pagination.limit, "list_reports");
        match self.client.list_reports(pagination.request()).await {
            Ok(reports) => {
                info!(count = reports.len(), "Found reports");
                text_result(render_list(&reports, &pagination, "reports", &[]))
            }
            Err(e) => {
                error!(error = %e, "Failed to list reports");
                error_result(format_error(&e, "listing reports"))
            }
        }
    }
}

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;
