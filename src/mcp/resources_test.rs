use chrono::NaiveDate;
use serde_json::json;

use super::{
    DASHBOARD_URI, PROJECTS_URI, RECENT_CONTACTS_URI, dashboard_text, projects_text,
    recent_contacts_text, resource_templates, static_resources,
};
use crate::models::{ContactResponse, ProjectResponse, TaskResponse};
use crate::test_support::MockPlanfix;

fn noon() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn test_static_resources_and_template() {
    let uris: Vec<String> = static_resources()
        .into_iter()
        .map(|r| r.raw.uri)
        .collect();
    assert_eq!(uris, vec![DASHBOARD_URI, PROJECTS_URI, RECENT_CONTACTS_URI]);

    let templates = resource_templates().unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].raw.uri_template, "task://{id}");
}

#[test]
fn test_dashboard_counts() {
    let tasks: Vec<TaskResponse> = serde_json::from_value(json!([
        { "id": 1, "endDateTime": { "date": "01-05-2025" } },
        { "id": 2, "endDateTime": { "date": "20-05-2025" } },
        { "id": 3, "overdue": true },
        { "id": 4 }
    ]))
    .unwrap();
    let projects: Vec<ProjectResponse> = serde_json::from_value(json!([
        { "id": 1 },
        { "id": 2, "isDeleted": true }
    ]))
    .unwrap();

    let text = dashboard_text(&tasks, &projects, noon());

    assert!(text.starts_with("Planfix summary as of 10.05.2025 12:00"));
    assert!(text.contains("- Active: 4\n- Overdue: 2"));
    assert!(text.contains("- Total: 2\n- Active: 1"));
    assert!(text.ends_with("Updated: 12:00"));
}

#[test]
fn test_projects_text() {
    assert_eq!(projects_text(&[]), "No projects found.");

    let projects: Vec<ProjectResponse> = serde_json::from_value(json!([
        { "id": 7, "name": "Website", "owner": { "id": "user:1", "name": "Anna" } },
        { "id": 8, "name": "CRM" }
    ]))
    .unwrap();

    assert_eq!(
        projects_text(&projects),
        "Projects (2)\n\n1. Website (#7)\n- Owner: Anna\n\n2. CRM (#8)"
    );
}

#[test]
fn test_recent_contacts_text() {
    assert_eq!(recent_contacts_text(&[]), "No contacts found.");

    let contacts: Vec<ContactResponse> = serde_json::from_value(json!([
        { "id": 5, "name": "Anna", "email": "anna@example.com", "position": "CTO" },
        {}
    ]))
    .unwrap();

    assert_eq!(
        recent_contacts_text(&contacts),
        "Recent contacts (2)\n\n1. Anna (#5)\n- Email: anna@example.com\n- Position: CTO\n\n2. No name (#0)"
    );
}

#[tokio::test]
async fn test_read_task_resource() {
    let mock = MockPlanfix::start().await;
    mock.respond(
        "GET task/11",
        200,
        json!({ "task": { "id": 11, "name": "Prepare contract" } }),
    );
    let server = mock.server();

    let text = server.read_resource_text("task://11").await.unwrap();

    assert!(text.starts_with("Task #11\n\nName: Prepare contract"));
    assert!(text.contains("\nUpdated: "));
}

#[tokio::test]
async fn test_read_task_resource_invalid_id_skips_api() {
    let mock = MockPlanfix::start().await;
    let server = mock.server();

    let text = server.read_resource_text("task://abc").await.unwrap();

    assert_eq!(text, "Invalid task ID: abc");
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_read_recent_contacts_uses_limit_ten() {
    let mock = MockPlanfix::start().await;
    mock.respond("POST contact/list", 200, json!({ "contacts": [] }));
    let server = mock.server();

    let text = server.read_resource_text(RECENT_CONTACTS_URI).await.unwrap();

    assert_eq!(text, "No contacts found.");
    assert_eq!(mock.last_request().body.unwrap()["pageSize"], 10);
}

#[tokio::test]
async fn test_read_dashboard_error_is_text() {
    let mock = MockPlanfix::start().await;
    mock.respond("POST task/list", 401, json!({}));
    let server = mock.server();

    let text = server.read_resource_text(DASHBOARD_URI).await.unwrap();

    assert!(text.starts_with("Error getting dashboard: Authentication failed"));
    assert_eq!(mock.requests().len(), 1);
}

#[tokio::test]
async fn test_read_dashboard_fetches_tasks_and_projects() {
    let mock = MockPlanfix::start().await;
    mock.respond("POST task/list", 200, json!({ "tasks": [{ "id": 1 }] }));
    mock.respond("POST project/list", 200, json!({ "projects": [] }));
    let server = mock.server();

    let text = server.read_resource_text(DASHBOARD_URI).await.unwrap();

    assert!(text.contains("- Active: 1"));
    let requests = mock.requests();
    assert_eq!(requests[0].body.as_ref().unwrap()["pageSize"], 100);
    assert_eq!(requests[1].path, "project/list");
}

#[tokio::test]
async fn test_unknown_resource_is_an_error() {
    let mock = MockPlanfix::start().await;
    let server = mock.server();

    assert!(server.read_resource_text("reports://all").await.is_err());
}
