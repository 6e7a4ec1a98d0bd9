//! Model Context Protocol (MCP) surface over the Planfix REST API.
//!
//! - **server**: [`PlanfixMcpServer`], the `ServerHandler` that owns the tool
//!   and prompt routers
//! - **tools**: read-only tools, one file per Planfix entity
//! - **resources**: dashboard, project list, recent contacts and `task://{id}`
//! - **prompts**: analysis and planning templates
//! - **service**: stdio and Streamable HTTP transports

mod error;
pub mod format;
pub mod pagination;
mod prompts;
pub mod resources;
mod server;
mod service;
pub mod tools;

pub use error::{ServerError, ServerResult};
pub use server::PlanfixMcpServer;
pub use service::{DEFAULT_BIND, ServeOptions, Transport, create_mcp_service, run};
