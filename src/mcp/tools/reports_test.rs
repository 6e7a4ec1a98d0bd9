use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use super::ListReportsParams;
use crate::test_support::{MockPlanfix, tool_text};

#[tokio::test]
async fn test_list_reports() {
    let mock = MockPlanfix::start().await;
    mock.respond(
        "POST report/list",
        200,
        json!({ "reports": [{ "id": 1, "name": "Weekly load" }] }),
    );
    let server = mock.server();

    let result = server
        .list_reports(Parameters(ListReportsParams::default()))
        .await
        .unwrap();

    let text = tool_text(&result);
    assert!(text.contains("\"name\": \"Weekly load\""));
    assert!(text.ends_with("Total found: 1 reports"));
}
