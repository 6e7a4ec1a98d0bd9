//! MCP tools for Planfix contacts and companies.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{Checks, IdInput, error_result, render_list, text_result};
use crate::api::ContactQuery;
use crate::mcp::PlanfixMcpServer;
use crate::mcp::format::{contact_card, format_error};
use crate::mcp::pagination::PageParams;

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListContactsParams {
    #[schemars(description = "List companies instead of people (default: false)")]
    pub is_company: Option<bool>,
    #[schemars(description = "Comma-separated list of fields to return (optional)")]
    pub fields: Option<String>,
    #[serde(flatten)]
    pub page: PageParams,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchContactsParams {
    #[schemars(description = "Text to look for in contact names")]
    pub query: String,
    #[schemars(description = "Search companies instead of people (default: false)")]
    pub is_company: Option<bool>,
    #[schemars(description = "Comma-separated list of fields to return (optional)")]
    pub fields: Option<String>,
    #[serde(flatten)]
    pub page: PageParams,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetContactDetailsParams {
    #[schemars(description = "Contact ID")]
    pub contact_id: IdInput,
}

// =============================================================================
// Contact Tools
// =============================================================================

fn noun(is_company: bool) -> &'static str {
    if is_company { "companies" } else { "contacts" }
}

#[tool_router(router = contact_tools, vis = "pub(crate)")]
impl PlanfixMcpServer {
    #[tool(
        description = "List Planfix contacts, or companies with is_company=true. Supports offset/limit or page/limit pagination."
    )]
    pub async fn list_contacts(
        &self,
        params: Parameters<ListContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut checks = Checks::new();
        let pagination = checks.page(&params.page);
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        let is_company = params.is_company.unwrap_or(false);
        let query = ContactQuery {
            page: pagination.request(),
            is_company,
            name: None,
            fields: params.fields,
        };
        info!(is_company, offset = pagination.offset, limit = pagination.limit, "list_contacts");

        match self.client.list_contacts(&query).await {
            Ok(contacts) => {
                info!(count = contacts.len(), "Found contacts");
                text_result(render_list(&contacts, &pagination, noun(is_company), &[]))
            }
            Err(e) => {
                error!(error = %e, "Failed to list contacts");
                error_result(format_error(&e, "listing contacts"))
            }
        }
    }

    #[tool(
        description = "Search Planfix contacts (or companies with is_company=true) by name. Supports offset/limit or page/limit pagination."
    )]
    pub async fn search_contacts(
        &self,
        params: Parameters<SearchContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut checks = Checks::new();
        let text = checks.query(&params.query);
        let pagination = checks.page(&params.page);
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        let is_company = params.is_company.unwrap_or(false);
        let filter = ContactQuery {
            page: pagination.request(),
            is_company,
            name: None,
            fields: params.fields,
        };
        info!(query = %text, is_company, "search_contacts");

        match self.client.search_contacts(&text, &filter).await {
            Ok(contacts) => {
                info!(count = contacts.len(), "Found contacts");
                let labels = vec![format!("query '{text}'")];
                text_result(render_list(&contacts, &pagination, noun(is_company), &labels))
            }
            Err(e) => {
                error!(error = %e, "Failed to search contacts");
                error_result(format_error(&e, "searching contacts"))
            }
        }
    }

    #[tool(
        description = "Get every available detail of one Planfix contact: channels, companies, position, description and dates."
    )]
    pub async fn get_contact_details(
        &self,
        params: Parameters<GetContactDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut checks = Checks::new();
        let contact_id = checks.id("contact_id", &params.0.contact_id);
        if let Err(message) = checks.finish() {
            return error_result(message);
        }

        info!(contact_id, "get_contact_details");
        match self.client.get_contact_details(contact_id, None).await {
            Ok(contact) => text_result(contact_card(&contact)),
            Err(e) => {
                error!(contact_id, error = %e, "Failed to get contact");
                error_result(format_error(&e, &format!("getting contact {contact_id}")))
            }
        }
    }
}

#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;
