//! Command line and logging setup for the `planfix-mcp` binary.
//!
//! Every setting can come from a flag, its environment variable or, for
//! the account and API key, a positional argument. Flags and environment
//! win over positionals.

use std::net::SocketAddr;

use clap::{ArgAction, Parser, builder::BoolishValueParser};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ProbeEndpoint, Settings};
use crate::mcp::{DEFAULT_BIND, ServeOptions, Transport};

#[derive(Parser, Debug)]
#[command(name = "planfix-mcp")]
#[command(author, version, about = "MCP server for the Planfix REST API", long_about = None)]
pub struct Cli {
    /// Planfix account name, as in https://<ACCOUNT>.planfix.ru
    #[arg(value_name = "ACCOUNT")]
    pub account_arg: Option<String>,

    /// Planfix REST API token
    #[arg(value_name = "API_KEY")]
    pub api_key_arg: Option<String>,

    #[arg(long, env = "PLANFIX_ACCOUNT")]
    pub account: Option<String>,

    #[arg(long, env = "PLANFIX_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Full REST base URL, replaces https://<ACCOUNT>.planfix.ru/rest
    #[arg(long, env = "PLANFIX_BASE_URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (default 30)
    #[arg(long, env = "PLANFIX_REQUEST_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Verbose logging
    #[arg(long, env = "DEBUG", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub debug: bool,

    /// Startup check as "<VERB> <path>", e.g. "POST contact/list"
    #[arg(long, env = "PLANFIX_PROBE_ENDPOINT")]
    pub probe_endpoint: Option<ProbeEndpoint>,

    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Listen address for the HTTP transport
    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Start without checking that Planfix is reachable
    #[arg(long)]
    pub skip_probe: bool,
}

impl Cli {
    pub fn serve_options(&self) -> ServeOptions {
        ServeOptions {
            transport: self.transport,
            bind: self.bind,
            skip_probe: self.skip_probe,
        }
    }

    pub fn into_settings(self) -> Settings {
        Settings {
            account: self.account.or(self.account_arg),
            api_key: self.api_key.or(self.api_key_arg),
            base_url: self.base_url,
            timeout_secs: self.timeout,
            debug: self.debug,
            probe: self.probe_endpoint,
        }
    }
}

fn default_filter(debug: bool) -> &'static str {
    if debug {
        "planfix_mcp=debug"
    } else {
        "planfix_mcp=info"
    }
}

/// Logs go to stderr; stdout belongs to the stdio transport.
pub fn init_tracing(debug: bool) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(debug).into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
