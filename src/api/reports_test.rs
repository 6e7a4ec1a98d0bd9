use serde_json::json;

use crate::api::PageRequest;
use crate::test_support::MockPlanfix;

#[tokio::test]
async fn test_list_reports() {
    let mock = MockPlanfix::start().await;
    mock.respond(
        "POST report/list",
        200,
        json!({ "reports": [{ "id": 1, "name": "Sales", "fields": [{ "id": "f1", "name": "Amount", "type": "number" }] }] }),
    );

    let reports = mock
        .client()
        .list_reports(PageRequest::new(0, 5))
        .await
        .unwrap();

    assert_eq!(reports[0].name.as_deref(), Some("Sales"));
    assert_eq!(
        mock.last_request().body,
        Some(json!({ "offset": 0, "pageSize": 5 }))
    );
}
