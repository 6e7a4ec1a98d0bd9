//! MCP server coordinator.
//!
//! Holds the injected Planfix client and combines the per-entity tool
//! routers, the prompt router and the resource handlers into one
//! [`ServerHandler`].

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::router::{prompt::PromptRouter, tool::ToolRouter},
    model::{
        GetPromptRequestParams, GetPromptResult, Implementation, ListPromptsResult,
        ListResourceTemplatesResult, ListResourcesResult, PaginatedRequestParams,
        ProtocolVersion, ReadResourceRequestParams, ReadResourceResult, ServerCapabilities,
        ServerInfo,
    },
    prompt_handler,
    service::RequestContext,
    tool_handler,
};

use crate::api::PlanfixClient;

use super::resources;

const INSTRUCTIONS: &str = "Read-only access to a Planfix account.\n\
Tasks: list_tasks, search_tasks, get_task.\n\
Contacts: list_contacts, search_contacts, get_contact_details.\n\
Projects: list_projects, get_project.\n\
Comments and files: list_comments, get_comment, list_files, get_file.\n\
People: list_employees, get_user.\n\
Reporting: list_reports, list_processes.\n\
List tools accept offset/limit or page/limit (limit 1-100, default 20).\n\
Resources: dashboard://summary, projects://list, task://{id}, contacts://recent.";

/// Planfix MCP server.
///
/// Cheap to clone: the client is shared and the routers are rebuilt per
/// session by [`PlanfixMcpServer::new`].
#[derive(Clone)]
pub struct PlanfixMcpServer {
    pub(crate) client: Arc<PlanfixClient>,
    tool_router: ToolRouter<Self>,
    prompt_router: PromptRouter<Self>,
}

impl PlanfixMcpServer {
    pub fn new(client: Arc<PlanfixClient>) -> Self {
        Self {
            client,
            tool_router: Self::task_tools()
                + Self::contact_tools()
                + Self::project_tools()
                + Self::comment_tools()
                + Self::file_tools()
                + Self::user_tools()
                + Self::report_tools()
                + Self::process_tools(),
            prompt_router: Self::prompt_router(),
        }
    }

    /// Names of every registered tool, sorted.
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        names
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for PlanfixMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "planfix-mcp".to_string(),
                title: Some("Planfix MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "Read-only tools, resources and prompts over the Planfix REST API".to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(resources::static_resources()))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult::with_all_items(
            resources::resource_templates()?,
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let text = self.read_resource_text(&request.uri).await?;
        Ok(ReadResourceResult {
            contents: vec![rmcp::model::ResourceContents::text(text, request.uri)],
        })
    }
}

#[cfg(test)]
#[path = "server_test.rs"]
mod server_test;
