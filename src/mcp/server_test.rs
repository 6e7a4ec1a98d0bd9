use rmcp::model::{CallToolRequestParams, ClientInfo};
use rmcp::{ClientHandler, ServerHandler, ServiceExt};
use serde_json::json;

use crate::test_support::MockPlanfix;

#[derive(Debug, Clone, Default)]
struct DummyClient;

impl ClientHandler for DummyClient {
    fn get_info(&self) -> ClientInfo {
        ClientInfo::default()
    }
}

#[tokio::test]
async fn test_server_info() {
    let mock = MockPlanfix::start().await;
    let info = mock.server().get_info();

    assert_eq!(info.server_info.name, "planfix-mcp");
    assert!(info.capabilities.tools.is_some());
    assert!(info.capabilities.resources.is_some());
    assert!(info.capabilities.prompts.is_some());
    assert!(info.instructions.unwrap().contains("task://{id}"));
}

#[tokio::test]
async fn test_server_registers_all_tools() {
    let mock = MockPlanfix::start().await;

    assert_eq!(
        mock.server().tool_names(),
        vec![
            "get_comment",
            "get_contact_details",
            "get_file",
            "get_project",
            "get_task",
            "get_user",
            "list_comments",
            "list_contacts",
            "list_employees",
            "list_files",
            "list_processes",
            "list_projects",
            "list_reports",
            "list_tasks",
            "search_contacts",
            "search_tasks",
        ]
    );
}

#[tokio::test]
async fn test_mcp_protocol_round_trip() {
    let mock = MockPlanfix::start().await;
    let (server_transport, client_transport) = tokio::io::duplex(16 * 1024);

    let server = mock.server();
    let server_handle = tokio::spawn(async move {
        let service = server.serve(server_transport).await.unwrap();
        service.waiting().await.unwrap();
    });

    let client = DummyClient.serve(client_transport).await.unwrap();

    let tools = client.list_tools(None).await.unwrap();
    assert_eq!(tools.tools.len(), 16);

    let prompts = client.list_prompts(None).await.unwrap();
    let mut prompt_names: Vec<&str> = prompts.prompts.iter().map(|p| p.name.as_str()).collect();
    prompt_names.sort();
    assert_eq!(
        prompt_names,
        vec!["analyze_project_status", "create_weekly_report", "plan_sprint"]
    );

    let resources = client.list_resources(None).await.unwrap();
    assert_eq!(resources.resources.len(), 3);

    let result = client
        .call_tool(CallToolRequestParams {
            meta: None,
            name: "get_task".into(),
            arguments: Some(json!({ "task_id": "abc" }).as_object().unwrap().clone()),
            task: None,
        })
        .await
        .unwrap();
    assert_eq!(
        crate::test_support::tool_text(&result),
        "Validation error: task_id must be a positive integer (got 'abc')"
    );
    assert!(mock.requests().is_empty());

    client.cancel().await.unwrap();
    server_handle.await.unwrap();
}
