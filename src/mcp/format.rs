//! Text rendering for tool and resource output.

use serde::Serialize;

use crate::api::ApiError;
use crate::models::{ContactResponse, TaskResponse};

const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// Pretty JSON with two-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("Failed to serialize response: {e}"))
}

/// User-facing message for a failed call made while `context`
/// (e.g. "listing tasks").
///
/// Generic API errors are classified by their text, since timeouts,
/// connection failures and unexpected statuses all share one variant.
pub fn format_error(error: &ApiError, context: &str) -> String {
    match error {
        ApiError::Auth { message } => format!(
            "Authentication failed while {context}: {message}. Check the API key and its permissions."
        ),
        ApiError::NotFound { message } => format!("Not found while {context}: {message}"),
        ApiError::Validation { message } => {
            format!("Unexpected response from Planfix while {context}: {message}")
        }
        ApiError::Api { status, message } => {
            let lower = message.to_lowercase();
            if message.contains("401") {
                format!(
                    "Authentication failed while {context}: invalid API credentials. Check the API key."
                )
            } else if message.contains("403") {
                format!("Access denied while {context}: the API key lacks the required permissions.")
            } else if lower.contains("timed out") || lower.contains("timeout") {
                format!("Planfix did not respond in time while {context}. Try again later.")
            } else if lower.contains("connect") {
                format!(
                    "Could not connect to Planfix while {context}. Check the account name and network access."
                )
            } else if status.is_some_and(|s| s >= 500) || message.starts_with("HTTP 5") {
                format!("Planfix server error while {context}: {message}")
            } else {
                format!("Error while {context}: {message}")
            }
        }
    }
}

/// First `max` characters of `text`, with an ellipsis when cut.
pub fn preview(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Human-readable contact card used by `get_contact_details`.
pub fn contact_card(contact: &ContactResponse) -> String {
    let id = contact
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "?".to_string());
    let mut lines = vec![
        format!("Contact #{id}"),
        String::new(),
        format!(
            "Name: {}",
            contact.full_name().unwrap_or_else(|| "No name".to_string())
        ),
    ];

    if let Some(email) = &contact.email {
        lines.push(format!("Email: {email}"));
    }
    if let Some(phone) = contact.first_phone() {
        lines.push(format!("Phone: {phone}"));
    }
    if let Some(companies) = contact.company_names() {
        lines.push(format!("Company: {companies}"));
    }
    if let Some(position) = &contact.position {
        lines.push(format!("Position: {position}"));
    }
    if let Some(description) = &contact.description {
        lines.push(format!("Description: {description}"));
    }
    if contact.is_company == Some(true) {
        lines.push("Type: Company".to_string());
    }
    if let Some(created) = &contact.created_date {
        lines.push(format!("Created: {}", created.display()));
    }

    lines.push(String::new());
    lines.push(format!("Full details for contact ID {id}"));
    lines.join("\n")
}

/// Task card for the `task://{id}` resource. `updated` is the render time.
pub fn task_card(task: &TaskResponse, updated: &str) -> String {
    let id = task
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "?".to_string());
    let mut lines = vec![
        format!("Task #{id}"),
        String::new(),
        format!("Name: {}", task.name.as_deref().unwrap_or("No name")),
    ];

    if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!(
            "Description: {}",
            preview(description, DESCRIPTION_PREVIEW_CHARS)
        ));
    }
    if let Some(status) = task.status.as_ref().and_then(|s| s.name.as_deref()) {
        lines.push(format!("Status: {status}"));
    }
    if let Some(responsible) = task.responsible_name() {
        lines.push(format!("Assignee: {responsible}"));
    }
    if let Some(project) = &task.project {
        lines.push(format!("Project: {}", project.label()));
    }
    if let Some(priority) = &task.priority {
        lines.push(format!("Priority: {priority}"));
    }
    if let Some(deadline) = &task.end_date_time {
        lines.push(format!("Deadline: {}", deadline.display()));
    }

    lines.push(String::new());
    lines.push(format!("Updated: {updated}"));
    lines.join("\n")
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;
