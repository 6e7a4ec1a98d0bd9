//! Server lifecycle: construct the client, probe it, serve, shut down.
//!
//! Two transports are available. `stdio` speaks MCP over stdin/stdout
//! for desktop hosts. `http` mounts rmcp's Streamable HTTP service at
//! `/mcp` on an axum router.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use clap::ValueEnum;
use rmcp::{
    ServiceExt,
    transport::{
        stdio,
        streamable_http_server::{
            StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
        },
    },
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::PlanfixClient;
use crate::config::Config;

use super::error::{ServerError, ServerResult};
use super::server::PlanfixMcpServer;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Transport {
    #[default]
    Stdio,
    Http,
}

#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub transport: Transport,
    pub bind: SocketAddr,
    pub skip_probe: bool,
}

impl Default for ServeOptions {
    fn default() -> Self {
        Self {
            transport: Transport::Stdio,
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            skip_probe: false,
        }
    }
}

/// Runs the server until the peer disconnects or Ctrl-C is pressed.
pub async fn run(config: Config, options: ServeOptions) -> ServerResult<()> {
    let client = Arc::new(PlanfixClient::new(&config)?);
    info!(base_url = client.base_url(), transport = ?options.transport, "Starting Planfix MCP server");

    if options.skip_probe {
        warn!("Skipping the Planfix connectivity probe");
    } else {
        client
            .probe()
            .await
            .map_err(|source| ServerError::Probe { source })?;
        info!("Connected to Planfix API");
    }

    let tools = PlanfixMcpServer::new(Arc::clone(&client)).tool_names();
    info!(count = tools.len(), tools = %tools.join(", "), "Registered MCP tools");

    let ct = CancellationToken::new();
    let shutdown = ct.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl-C, shutting down");
            shutdown.cancel();
        }
    });

    match options.transport {
        Transport::Stdio => serve_stdio(client, ct).await,
        Transport::Http => serve_http(client, options.bind, ct).await,
    }
}

async fn serve_stdio(client: Arc<PlanfixClient>, ct: CancellationToken) -> ServerResult<()> {
    let service = PlanfixMcpServer::new(client)
        .serve(stdio())
        .await
        .map_err(|e| ServerError::Transport {
            message: e.to_string(),
        })?;

    tokio::select! {
        reason = service.waiting() => {
            let reason = reason.map_err(|e| ServerError::Transport {
                message: e.to_string(),
            })?;
            info!(?reason, "MCP session ended");
        }
        _ = ct.cancelled() => {}
    }
    Ok(())
}

async fn serve_http(
    client: Arc<PlanfixClient>,
    bind: SocketAddr,
    ct: CancellationToken,
) -> ServerResult<()> {
    let app = Router::new()
        .nest_service("/mcp", create_mcp_service(client, ct.child_token()))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(bind).await?;
    info!("MCP server listening on http://{}/mcp", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(ct.cancelled_owned())
        .await?;
    Ok(())
}

/// Streamable HTTP service, one [`PlanfixMcpServer`] per session.
///
/// ```no_run
/// use std::sync::Arc;
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use planfix_mcp::api::PlanfixClient;
/// # use planfix_mcp::config::Config;
/// # use planfix_mcp::mcp::create_mcp_service;
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::with_base_url("https://example.planfix.ru/rest", "token");
/// let client = Arc::new(PlanfixClient::new(&config)?);
///
/// let app: Router = Router::new()
///     .nest_service("/mcp", create_mcp_service(client, CancellationToken::new()));
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service(
    client: Arc<PlanfixClient>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<PlanfixMcpServer, LocalSessionManager> {
    let service_factory = move || -> Result<PlanfixMcpServer, std::io::Error> {
        Ok(PlanfixMcpServer::new(Arc::clone(&client)))
    };

    let config = StreamableHttpServerConfig {
        cancellation_token,
        ..Default::default()
    };

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;
