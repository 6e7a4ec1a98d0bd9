//! Runtime configuration.
//!
//! Raw values come from the command line, the environment and an optional
//! `.env` file (see [`crate::cli`]); [`Config::resolve`] validates them and
//! fills in defaults.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROBE_ENDPOINT: &str = "POST contact/list";

#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Planfix account is not configured")]
    #[diagnostic(
        code(planfix::config::missing_account),
        help("Set PLANFIX_ACCOUNT, pass --account, or provide PLANFIX_BASE_URL")
    )]
    MissingAccount,

    #[error("Planfix API key is not configured")]
    #[diagnostic(
        code(planfix::config::missing_api_key),
        help("Set PLANFIX_API_KEY or pass --api-key")
    )]
    MissingApiKey,

    #[error("Invalid probe endpoint '{value}'")]
    #[diagnostic(
        code(planfix::config::invalid_probe),
        help("Use \"<GET|POST> <path>\", for example \"POST contact/list\"")
    )]
    InvalidProbe { value: String },

    #[error("Invalid request timeout: {value}")]
    #[diagnostic(
        code(planfix::config::invalid_timeout),
        help("The timeout is a whole number of seconds, at least 1")
    )]
    InvalidTimeout { value: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    Get,
    Post,
}

/// Endpoint hit once at startup to check credentials and reachability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeEndpoint {
    pub method: ProbeMethod,
    pub path: String,
}

impl Default for ProbeEndpoint {
    fn default() -> Self {
        Self {
            method: ProbeMethod::Post,
            path: "contact/list".to_string(),
        }
    }
}

impl FromStr for ProbeEndpoint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidProbe {
            value: s.to_string(),
        };
        let (verb, path) = s.trim().split_once(char::is_whitespace).ok_or_else(invalid)?;
        let method = match verb.to_ascii_uppercase().as_str() {
            "GET" => ProbeMethod::Get,
            "POST" => ProbeMethod::Post,
            _ => return Err(invalid()),
        };
        let path = path.trim().trim_start_matches('/');
        if path.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            method,
            path: path.to_string(),
        })
    }
}

impl fmt::Display for ProbeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.method {
            ProbeMethod::Get => "GET",
            ProbeMethod::Post => "POST",
        };
        write!(f, "{verb} {}", self.path)
    }
}

/// Unvalidated settings as collected from the outside world.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub account: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub debug: bool,
    pub probe: Option<ProbeEndpoint>,
}

#[derive(Clone)]
pub struct Config {
    pub account: Option<String>,
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub debug: bool,
    pub probe: ProbeEndpoint,
}

impl Config {
    /// Validates raw settings.
    ///
    /// The base URL is the override when present, else
    /// `https://{account}.planfix.ru/rest`. Blank strings count as unset.
    pub fn resolve(settings: Settings) -> Result<Self, ConfigError> {
        let account = non_blank(settings.account);
        let api_key = non_blank(settings.api_key).ok_or(ConfigError::MissingApiKey)?;

        let base_url = match non_blank(settings.base_url) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                let account = account.as_deref().ok_or(ConfigError::MissingAccount)?;
                format!("https://{account}.planfix.ru/rest")
            }
        };

        let timeout_secs = settings.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                value: timeout_secs,
            });
        }

        Ok(Self {
            account,
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            debug: settings.debug,
            probe: settings.probe.unwrap_or_default(),
        })
    }

    /// Config pointing at an arbitrary base URL, mostly for tests.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            account: None,
            api_key: api_key.into(),
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            debug: false,
            probe: ProbeEndpoint::default(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("account", &self.account)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .field("probe", &self.probe)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
