//! MCP server exposing a Planfix account through read-only tools,
//! resources and prompts.
//!
//! - [`api`]: HTTP client, error normalization and one module per entity
//! - [`models`]: request and response records
//! - [`mcp`]: the MCP surface and its transports
//! - [`config`], [`cli`]: settings and command line

pub mod api;
pub mod cli;
pub mod config;
pub mod mcp;
pub mod models;
pub mod serde_utils;

#[cfg(test)]
mod test_support;
