use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use super::{GetUserParams, ListEmployeesParams};
use crate::mcp::tools::IdInput;
use crate::test_support::{MockPlanfix, tool_text};

#[tokio::test]
async fn test_get_user_numeric_and_prefixed() {
    let mock = MockPlanfix::start().await;
    let user = json!({ "user": { "id": "user:5", "name": "Oleg" } });
    mock.respond("GET user/5", 200, user.clone());
    mock.respond("GET user/user:5", 200, user);
    let server = mock.server();

    for id in [IdInput::from(5), IdInput::from("user:5")] {
        let result = server
            .get_user(Parameters(GetUserParams {
                user_id: id,
                fields: None,
            }))
            .await
            .unwrap();

        assert!(tool_text(&result).contains("\"name\": \"Oleg\""));
    }
    let paths: Vec<String> = mock.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["user/5", "user/user:5"]);
}

#[tokio::test]
async fn test_get_user_rejects_bad_prefix() {
    let mock = MockPlanfix::start().await;
    let server = mock.server();

    let result = server
        .get_user(Parameters(GetUserParams {
            user_id: IdInput::from("user:x"),
            fields: None,
        }))
        .await
        .unwrap();

    assert_eq!(
        tool_text(&result),
        "Validation error: user_id must be a positive integer or 'user:<id>' (got 'user:x')"
    );
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_list_employees() {
    let mock = MockPlanfix::start().await;
    mock.respond(
        "POST user/list",
        200,
        json!({ "users": [{ "id": 1, "name": "Anna" }, { "id": "user:2", "name": "Oleg" }] }),
    );
    let server = mock.server();

    let result = server
        .list_employees(Parameters(ListEmployeesParams::default()))
        .await
        .unwrap();

    assert!(tool_text(&result).ends_with("Total found: 2 employees"));
}
