//! MCP tools for Planfix comments.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{Checks, IdInput, error_result, render_list, text_result};
use crate::api::CommentQuery;
use crate::mcp::PlanfixMcpServer;
use crate::mcp::format::{format_error, to_pretty_json};
use crate::mcp::pagination::PageParams;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetCommentParams {
    #[schemars(description = "Comment ID")]
    pub comment_id: IdInput,
    #[schemars(description = "Comma-separated list of fields to return (optional)")]
    pub fields: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListCommentsParams {
    #[schemars(description = "Comments of this task (takes precedence over project_id)")]
    pub task_id: Option<IdInput>,
    #[schemars(description = "Comments of this project")]
    pub project_id: Option<IdInput>,
    #[schemars(description = "Comma-separated list of fields to return (optional)")]
    pub fields: Option<String>,
    #[serde(flatten)]
    pub page: PageParams,
}

#[tool_router(router = comment_tools, vis = "pub(crate)")]
impl PlanfixMcpServer {
    #[tool(description = "Get one Planfix comment by ID.")]
    pub async fn get_comment(
        &self,
        params: Parameters<GetCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut checks = Checks::new();
        let comment_id = checks.id("comment_id", &params.comment_id);
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        info!(comment_id, "get_comment");
        match self
            .client
            .get_comment(comment_id, params.fields.as_deref())
            .await
        {
            Ok(comment) => text_result(to_pretty_json(&comment)),
            Err(e) => {
                error!(comment_id, error = %e, "Failed to get comment");
                error_result(format_error(&e, &format!("getting comment {comment_id}")))
            }
        }
    }

    #[tool(
        description = "List Planfix comments of a task (task_id) or a project (project_id), or account-wide when neither is given. Supports offset/limit or page/limit pagination."
    )]
    pub async fn list_comments(
        &self,
        params: Parameters<ListCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut checks = Checks::new();
        let pagination = checks.page(&params.page);
        let task_id = checks.optional_id("task_id", params.task_id.as_ref());
        let project_id = checks.optional_id("project_id", params.project_id.as_ref());
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        let query = CommentQuery {
            page: pagination.request(),
            task_id,
            project_id,
            fields: params.fields,
        };
        info!(?task_id, ?project_id, limit = pagination.limit, "list_comments");

        let mut labels = Vec::new();
        if let Some(task_id) = task_id {
            labels.push(format!("task {task_id}"));
        }
        if let Some(project_id) = project_id {
            labels.push(format!("project {project_id}"));
        }

        match self.client.list_comments(&query).await {
            Ok(comments) => {
                info!(count = comments.len(), "Found comments");
                text_result(render_list(&comments, &pagination, "comments", &labels))
            }
            Err(e) => {
                error!(error = %e, "Failed to list comments");
                error_result(format_error(&e, "listing comments"))
            }
        }
    }
}

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;
