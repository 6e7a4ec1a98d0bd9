//! Read-only MCP resources.
//!
//! - `dashboard://summary`: active and overdue task counts, project counts
//! - `projects://list`: numbered project list
//! - `task://{id}`: one task as a short card
//! - `contacts://recent`: the ten most recent contacts
//!
//! API failures are rendered into the resource text. Only an unknown URI is
//! a protocol error.

use chrono::{Local, NaiveDateTime};
use rmcp::{
    ErrorData as McpError,
    model::{AnnotateAble, RawResource, Resource, ResourceTemplate},
};
use serde_json::json;
use tracing::{error, info};

use crate::api::{ContactQuery, PageRequest, TaskQuery};
use crate::models::{ContactResponse, ProjectResponse, StatusFilter, TaskResponse};

use super::PlanfixMcpServer;
use super::format::{format_error, task_card};
use super::pagination::MAX_LIMIT;

pub const DASHBOARD_URI: &str = "dashboard://summary";
pub const PROJECTS_URI: &str = "projects://list";
pub const RECENT_CONTACTS_URI: &str = "contacts://recent";
pub const TASK_URI_TEMPLATE: &str = "task://{id}";

const TASK_URI_PREFIX: &str = "task://";
const RECENT_CONTACTS_LIMIT: u32 = 10;
const MIME_TEXT: &str = "text/plain";

pub fn static_resources() -> Vec<Resource> {
    [
        (
            DASHBOARD_URI,
            "dashboard",
            "Workspace summary: active and overdue tasks, total and active projects",
        ),
        (PROJECTS_URI, "projects", "Numbered list of Planfix projects"),
        (
            RECENT_CONTACTS_URI,
            "recent-contacts",
            "The ten most recent contacts with email, phone, company and position",
        ),
    ]
    .into_iter()
    .map(|(uri, name, description)| {
        let mut resource = RawResource::new(uri, name);
        resource.description = Some(description.to_string());
        resource.mime_type = Some(MIME_TEXT.to_string());
        resource.no_annotation()
    })
    .collect()
}

pub fn resource_templates() -> Result<Vec<ResourceTemplate>, McpError> {
    let template = serde_json::from_value(json!({
        "uriTemplate": TASK_URI_TEMPLATE,
        "name": "task",
        "description": "One Planfix task: name, description, status, assignee, project, priority and deadline",
        "mimeType": MIME_TEXT,
    }))
    .map_err(|e| McpError::internal_error(format!("invalid resource template: {e}"), None))?;
    Ok(vec![template])
}

impl PlanfixMcpServer {
    /// Text of the resource at `uri`.
    pub(crate) async fn read_resource_text(&self, uri: &str) -> Result<String, McpError> {
        info!(uri, "read_resource");
        match uri {
            DASHBOARD_URI => Ok(self.dashboard_summary().await),
            PROJECTS_URI => Ok(self.projects_list().await),
            RECENT_CONTACTS_URI => Ok(self.recent_contacts().await),
            _ => match uri.strip_prefix(TASK_URI_PREFIX) {
                Some(task_id) => Ok(self.task_details(task_id).await),
                None => Err(McpError::resource_not_found(
                    format!("Unknown resource: {uri}"),
                    None,
                )),
            },
        }
    }

    async fn dashboard_summary(&self) -> String {
        let query = TaskQuery {
            page: PageRequest::first(MAX_LIMIT),
            status: StatusFilter::Active,
            ..Default::default()
        };
        let tasks = match self.client.list_tasks(&query).await {
            Ok(tasks) => tasks,
            Err(e) => {
                error!(error = %e, "Failed to build dashboard");
                return format!(
                    "Error getting dashboard: {}",
                    format_error(&e, "listing active tasks")
                );
            }
        };
        let projects = match self.client.list_projects(PageRequest::first(MAX_LIMIT)).await {
            Ok(projects) => projects,
            Err(e) => {
                error!(error = %e, "Failed to build dashboard");
                return format!(
                    "Error getting dashboard: {}",
                    format_error(&e, "listing projects")
                );
            }
        };
        dashboard_text(&tasks, &projects, Local::now().naive_local())
    }

    async fn projects_list(&self) -> String {
        match self.client.list_projects(PageRequest::default()).await {
            Ok(projects) => projects_text(&projects),
            Err(e) => {
                error!(error = %e, "Failed to list projects");
                format!(
                    "Error getting projects: {}",
                    format_error(&e, "listing projects")
                )
            }
        }
    }

    async fn task_details(&self, raw_id: &str) -> String {
        let task_id = match raw_id.trim().parse::<i64>() {
            Ok(id) if id >= 1 => id,
            _ => return format!("Invalid task ID: {raw_id}"),
        };
        match self.client.get_task(task_id, None).await {
            Ok(task) => task_card(
                &task,
                &Local::now().format("%d.%m.%Y %H:%M").to_string(),
            ),
            Err(e) => {
                error!(task_id, error = %e, "Failed to get task");
                format!(
                    "Error getting task: {}",
                    format_error(&e, &format!("getting task {task_id}"))
                )
            }
        }
    }

    async fn recent_contacts(&self) -> String {
        let query = ContactQuery {
            page: PageRequest::first(RECENT_CONTACTS_LIMIT),
            ..Default::default()
        };
        match self.client.list_contacts(&query).await {
            Ok(contacts) => recent_contacts_text(&contacts),
            Err(e) => {
                error!(error = %e, "Failed to list contacts");
                format!(
                    "Error getting contacts: {}",
                    format_error(&e, "listing contacts")
                )
            }
        }
    }
}

pub(crate) fn dashboard_text(
    tasks: &[TaskResponse],
    projects: &[ProjectResponse],
    now: NaiveDateTime,
) -> String {
    let overdue = tasks.iter().filter(|task| task.is_overdue_at(now)).count();
    let active_projects = projects.iter().filter(|p| p.is_active()).count();

    [
        format!("Planfix summary as of {}", now.format("%d.%m.%Y %H:%M")),
        String::new(),
        "TASKS:".to_string(),
        format!("- Active: {}", tasks.len()),
        format!("- Overdue: {overdue}"),
        String::new(),
        "PROJECTS:".to_string(),
        format!("- Total: {}", projects.len()),
        format!("- Active: {active_projects}"),
        String::new(),
        format!("Updated: {}", now.format("%H:%M")),
    ]
    .join("\n")
}

pub(crate) fn projects_text(projects: &[ProjectResponse]) -> String {
    if projects.is_empty() {
        return "No projects found.".to_string();
    }

    let mut blocks = vec![format!("Projects ({})", projects.len())];
    for (index, project) in projects.iter().enumerate() {
        let mut lines = vec![format!(
            "{}. {} (#{})",
            index + 1,
            project.name.as_deref().unwrap_or("Untitled"),
            project.id.map(|id| id.to_string()).unwrap_or_else(|| "?".to_string())
        )];
        if let Some(owner) = project.owner.as_ref().and_then(|o| o.name.as_deref()) {
            lines.push(format!("- Owner: {owner}"));
        }
        if let Some(client) = &project.client {
            lines.push(format!("- Client: {}", client.label()));
        }
        if let Some(end) = &project.end_date {
            lines.push(format!("- Ends: {}", end.display()));
        }
        if !project.is_active() {
            lines.push("- Status: deleted".to_string());
        }
        blocks.push(lines.join("\n"));
    }
    blocks.join("\n\n")
}

pub(crate) fn recent_contacts_text(contacts: &[ContactResponse]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }

    let mut blocks = vec![format!("Recent contacts ({})", contacts.len())];
    for (index, contact) in contacts.iter().enumerate() {
        let mut lines = vec![format!(
            "{}. {} (#{})",
            index + 1,
            contact.full_name().unwrap_or_else(|| "No name".to_string()),
            contact.id.unwrap_or(0)
        )];
        if let Some(email) = &contact.email {
            lines.push(format!("- Email: {email}"));
        }
        if let Some(phone) = contact.first_phone() {
            lines.push(format!("- Phone: {phone}"));
        }
        if let Some(companies) = contact.company_names() {
            lines.push(format!("- Company: {companies}"));
        }
        if let Some(position) = &contact.position {
            lines.push(format!("- Position: {position}"));
        }
        blocks.push(lines.join("\n"));
    }
    blocks.join("\n\n")
}

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;
