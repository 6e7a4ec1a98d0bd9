use serde_json::json;

use crate::api::{ApiError, PageRequest};
use crate::test_support::MockPlanfix;

#[tokio::test]
async fn test_list_processes() {
    let mock = MockPlanfix::start().await;
    mock.respond(
        "POST process/list",
        200,
        json!({ "processes": [{ "id": 2, "name": "Sales funnel", "status": { "id": 1, "name": "Active" } }] }),
    );

    let processes = mock
        .client()
        .list_processes(PageRequest::default())
        .await
        .unwrap();

    assert_eq!(processes.len(), 1);
    assert_eq!(
        processes[0].status.as_ref().and_then(|s| s.name.as_deref()),
        Some("Active")
    );
}

#[tokio::test]
async fn test_list_processes_requires_list() {
    let mock = MockPlanfix::start().await;
    mock.respond("POST process/list", 200, json!({ "processes": {} }));

    let err = mock
        .client()
        .list_processes(PageRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::validation("Expected 'processes' to be a list"));
}
