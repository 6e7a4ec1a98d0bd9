use miette::Diagnostic;
use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Failures that stop the server from starting or serving.
#[derive(Error, Diagnostic, Debug)]
pub enum ServerError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to create Planfix client: {0}")]
    #[diagnostic(code(planfix::server::client))]
    Client(#[from] ApiError),

    #[error("Planfix API is not reachable: {source}")]
    #[diagnostic(
        code(planfix::server::probe),
        help("Check PLANFIX_ACCOUNT and PLANFIX_API_KEY, or start with --skip-probe")
    )]
    Probe { source: ApiError },

    #[error("I/O error: {0}")]
    #[diagnostic(code(planfix::server::io))]
    Io(#[from] std::io::Error),

    #[error("MCP transport error: {message}")]
    #[diagnostic(code(planfix::server::transport))]
    Transport { message: String },
}

pub type ServerResult<T> = Result<T, ServerError>;
