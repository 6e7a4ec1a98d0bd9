use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use super::{GetProjectParams, ListProjectsParams};
use crate::mcp::pagination::PageParams;
use crate::mcp::tools::IdInput;
use crate::test_support::{MockPlanfix, tool_text};

#[tokio::test]
async fn test_get_project_with_custom_fields() {
    let mock = MockPlanfix::start().await;
    mock.respond(
        "GET project/7",
        200,
        json!({ "project": { "id": 7, "name": "Website" } }),
    );
    let server = mock.server();

    let result = server
        .get_project(Parameters(GetProjectParams {
            project_id: IdInput::from(7),
            fields: Some("id,name".to_string()),
        }))
        .await
        .unwrap();

    assert!(tool_text(&result).contains("\"name\": \"Website\""));
    assert_eq!(
        mock.last_request().query.get("fields").map(String::as_str),
        Some("id,name")
    );
}

#[tokio::test]
async fn test_get_project_rejects_zero_id() {
    let mock = MockPlanfix::start().await;
    let server = mock.server();

    let result = server
        .get_project(Parameters(GetProjectParams {
            project_id: IdInput::from(0),
            fields: None,
        }))
        .await
        .unwrap();

    assert_eq!(
        tool_text(&result),
        "Validation error: project_id must be a positive integer (got 0)"
    );
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_list_projects_offset_footer() {
    let mock = MockPlanfix::start().await;
    mock.respond(
        "POST project/list",
        200,
        json!({ "projects": [{ "id": 1, "name": "A" }, { "id": 2, "name": "B" }, { "id": 3, "name": "C" }] }),
    );
    let server = mock.server();

    let result = server
        .list_projects(Parameters(ListProjectsParams {
            page: PageParams {
                offset: Some(10),
                limit: Some(2),
                page: None,
            },
        }))
        .await
        .unwrap();

    let text = tool_text(&result);
    assert!(!text.contains("\"name\": \"C\""));
    assert!(text.ends_with(
        "Showing 2 results (limit: 2), offset 10. More may exist: use offset=12 to fetch the next page."
    ));
}

#[tokio::test]
async fn test_list_projects_server_error() {
    let mock = MockPlanfix::start().await;
    mock.respond(
        "POST project/list",
        500,
        json!({ "result": "fail", "code": 1, "error": "Internal" }),
    );
    let server = mock.server();

    let result = server
        .list_projects(Parameters(ListProjectsParams::default()))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        tool_text(&result),
        "Planfix server error while listing projects: API Error 1: Internal"
    );
}
