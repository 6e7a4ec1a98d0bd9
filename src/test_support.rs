//! In-process stand-in for the Planfix REST API, shared by the unit tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use rmcp::model::CallToolResult;

use crate::api::PlanfixClient;
use crate::config::Config;
use crate::mcp::PlanfixMcpServer;

pub const TEST_TOKEN: &str = "test-token";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Clone)]
struct MockRoute {
    status: u16,
    body: String,
    delay: Option<Duration>,
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<Mutex<HashMap<String, MockRoute>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Serves canned responses keyed by `"<METHOD> <path>"`, where `path` is
/// relative to `/rest/` (e.g. `"POST task/list"`). Unknown routes get 404.
pub struct MockPlanfix {
    addr: SocketAddr,
    state: MockState,
    _handle: JoinHandle<()>,
}

impl MockPlanfix {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            _handle: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/rest", self.addr)
    }

    pub fn config(&self) -> Config {
        Config::with_base_url(self.base_url(), TEST_TOKEN)
    }

    pub fn client(&self) -> PlanfixClient {
        PlanfixClient::new(&self.config()).unwrap()
    }

    pub fn server(&self) -> PlanfixMcpServer {
        PlanfixMcpServer::new(Arc::new(self.client()))
    }

    pub fn respond(&self, route: &str, status: u16, body: Value) -> &Self {
        self.insert(route, status, body.to_string(), None)
    }

    pub fn respond_raw(&self, route: &str, status: u16, body: &str) -> &Self {
        self.insert(route, status, body.to_string(), None)
    }

    pub fn respond_slow(&self, route: &str, body: Value, delay: Duration) -> &Self {
        self.insert(route, 200, body.to_string(), Some(delay))
    }

    fn insert(&self, route: &str, status: u16, body: String, delay: Option<Duration>) -> &Self {
        self.state.routes.lock().unwrap().insert(
            route.to_string(),
            MockRoute {
                status,
                body,
                delay,
            },
        );
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("mock Planfix received no requests")
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().trim_start_matches("/rest/").to_string();
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        query,
        body: serde_json::from_slice(&body).ok(),
        authorization: header_value(header::AUTHORIZATION),
        user_agent: header_value(header::USER_AGENT),
    });

    let route = state
        .routes
        .lock()
        .unwrap()
        .get(&format!("{method} {path}"))
        .cloned();

    let Some(route) = route else {
        return (StatusCode::NOT_FOUND, "{}").into_response();
    };
    if let Some(delay) = route.delay {
        tokio::time::sleep(delay).await;
    }
    (
        StatusCode::from_u16(route.status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        route.body,
    )
        .into_response()
}

/// URL of a local port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/rest")
}

/// Text of the first content block of a tool result.
pub fn tool_text(result: &CallToolResult) -> &str {
    result
        .content
        .first()
        .and_then(|content| content.raw.as_text())
        .map(|text| text.text.as_str())
        .expect("tool result has no text content")
}
