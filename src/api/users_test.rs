use serde_json::json;

use crate::api::PageRequest;
use crate::models::{EntityId, USER_DEFAULT_FIELDS, USER_LIST_FIELDS};
use crate::test_support::MockPlanfix;

#[tokio::test]
async fn test_get_user_accepts_prefixed_id() {
    let mock = MockPlanfix::start().await;
    mock.respond(
        "GET user/user:5",
        200,
        json!({ "user": { "id": "user:5", "name": "Pavel", "position": { "id": 1, "name": "Manager" } } }),
    );

    let user = mock.client().get_user("user:5", None).await.unwrap();

    assert_eq!(user.id, Some(EntityId::from("user:5")));
    assert_eq!(
        mock.last_request().query.get("fields").map(String::as_str),
        Some(USER_DEFAULT_FIELDS)
    );
}

#[tokio::test]
async fn test_list_employees() {
    let mock = MockPlanfix::start().await;
    mock.respond(
        "POST user/list",
        200,
        json!({ "users": [{ "id": 1, "name": "Pavel" }, { "id": 2, "name": "Irina" }] }),
    );

    let users = mock
        .client()
        .list_employees(PageRequest::default())
        .await
        .unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(mock.last_request().body.unwrap()["fields"], USER_LIST_FIELDS);
}
