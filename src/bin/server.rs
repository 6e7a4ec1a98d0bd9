//! Planfix MCP server binary.
//!
//! Reads `.env`, parses the command line, then hands a validated config to
//! [`planfix_mcp::mcp::run`].

use clap::Parser;
use planfix_mcp::cli::{Cli, init_tracing};
use planfix_mcp::config::Config;
use planfix_mcp::mcp;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let options = cli.serve_options();
    let config = Config::resolve(cli.into_settings())?;

    init_tracing(config.debug);
    mcp::run(config, options).await?;

    Ok(())
}
