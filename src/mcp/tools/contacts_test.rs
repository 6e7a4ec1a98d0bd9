use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use super::{GetContactDetailsParams, ListContactsParams, SearchContactsParams};
use crate::mcp::tools::IdInput;
use crate::models::CONTACT_ALL_FIELDS;
use crate::test_support::{MockPlanfix, tool_text};

#[tokio::test]
async fn test_list_companies() {
    let mock = MockPlanfix::start().await;
    mock.respond(
        "POST contact/list",
        200,
        json!({ "contacts": [{ "id": 3, "name": "Acme", "isCompany": true }] }),
    );
    let server = mock.server();

    let result = server
        .list_contacts(Parameters(ListContactsParams {
            is_company: Some(true),
            ..Default::default()
        }))
        .await
        .unwrap();

    assert!(tool_text(&result).ends_with("Total found: 1 companies"));
    let body = mock.last_request().body.unwrap();
    assert_eq!(body["isCompany"], true);
    assert!(body.get("filters").is_none());
}

#[tokio::test]
async fn test_list_contacts_missing_key_is_reported() {
    let mock = MockPlanfix::start().await;
    mock.respond("POST contact/list", 200, json!({ "result": "success" }));
    let server = mock.server();

    let result = server
        .list_contacts(Parameters(ListContactsParams::default()))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    assert!(tool_text(&result).contains("'contacts'"));
}

#[tokio::test]
async fn test_search_contacts_sends_name_filter() {
    let mock = MockPlanfix::start().await;
    mock.respond(
        "POST contact/list",
        200,
        json!({ "contacts": [{ "id": 5, "name": "Anna" }] }),
    );
    let server = mock.server();

    let result = server
        .search_contacts(Parameters(SearchContactsParams {
            query: "Anna".to_string(),
            ..Default::default()
        }))
        .await
        .unwrap();

    assert!(tool_text(&result).ends_with("Total found: 1 contacts (query 'Anna')"));
    let body = mock.last_request().body.unwrap();
    assert_eq!(
        body["filters"],
        json!([{ "type": 4001, "operator": "equal", "value": "Anna" }])
    );
    assert_eq!(body["isCompany"], false);
}

#[tokio::test]
async fn test_get_contact_details_renders_card() {
    let mock = MockPlanfix::start().await;
    mock.respond(
        "GET contact/5",
        200,
        json!({ "contact": { "id": 5, "name": "Anna", "email": "anna@example.com" } }),
    );
    let server = mock.server();

    let result = server
        .get_contact_details(Parameters(GetContactDetailsParams {
            contact_id: IdInput::from(5),
        }))
        .await
        .unwrap();

    let text = tool_text(&result);
    assert!(text.starts_with("Contact #5"));
    assert!(text.contains("Email: anna@example.com"));
    let request = mock.last_request();
    assert_eq!(request.query.get("fields").map(String::as_str), Some(CONTACT_ALL_FIELDS));
}

#[tokio::test]
async fn test_get_contact_details_auth_failure() {
    let mock = MockPlanfix::start().await;
    mock.respond("GET contact/5", 401, json!({}));
    let server = mock.server();

    let result = server
        .get_contact_details(Parameters(GetContactDetailsParams {
            contact_id: IdInput::from(5),
        }))
        .await
        .unwrap();

    assert!(tool_text(&result).starts_with("Authentication failed while getting contact 5"));
}
