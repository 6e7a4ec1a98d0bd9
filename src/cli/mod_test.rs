use std::env;

use clap::Parser;
use serial_test::serial;

use super::{Cli, default_filter};
use crate::config::{Config, ProbeMethod};
use crate::mcp::Transport;

const VARS: [&str; 6] = [
    "PLANFIX_ACCOUNT",
    "PLANFIX_API_KEY",
    "PLANFIX_BASE_URL",
    "PLANFIX_REQUEST_TIMEOUT",
    "DEBUG",
    "PLANFIX_PROBE_ENDPOINT",
];

fn clear_env() {
    for var in VARS {
        unsafe {
            env::remove_var(var);
        }
    }
}

#[test]
#[serial]
fn test_positional_arguments() {
    clear_env();

    let cli = Cli::try_parse_from(["planfix-mcp", "acme", "secret"]).unwrap();
    let options = cli.serve_options();
    let config = Config::resolve(cli.into_settings()).unwrap();

    assert_eq!(config.base_url, "https://acme.planfix.ru/rest");
    assert_eq!(config.api_key, "secret");
    assert_eq!(options.transport, Transport::Stdio);
    assert_eq!(options.bind.to_string(), "127.0.0.1:8000");
    assert!(!options.skip_probe);
}

#[test]
#[serial]
fn test_environment_beats_positionals() {
    clear_env();
    unsafe {
        env::set_var("PLANFIX_ACCOUNT", "from-env");
        env::set_var("PLANFIX_REQUEST_TIMEOUT", "5");
        env::set_var("DEBUG", "true");
        env::set_var("PLANFIX_PROBE_ENDPOINT", "GET user/list");
    }

    let cli = Cli::try_parse_from(["planfix-mcp", "from-args", "secret"]).unwrap();
    let settings = cli.into_settings();

    assert_eq!(settings.account.as_deref(), Some("from-env"));
    assert_eq!(settings.api_key.as_deref(), Some("secret"));
    assert_eq!(settings.timeout_secs, Some(5));
    assert!(settings.debug);
    let probe = settings.probe.unwrap();
    assert_eq!(probe.method, ProbeMethod::Get);
    assert_eq!(probe.path, "user/list");

    clear_env();
}

#[test]
#[serial]
fn test_flags_beat_environment() {
    clear_env();
    unsafe {
        env::set_var("PLANFIX_API_KEY", "env-key");
    }

    let cli = Cli::try_parse_from([
        "planfix-mcp",
        "--api-key",
        "flag-key",
        "--base-url",
        "http://localhost:9000/rest/",
        "--transport",
        "http",
        "--bind",
        "0.0.0.0:9100",
        "--skip-probe",
    ])
    .unwrap();
    let options = cli.serve_options();
    let config = Config::resolve(cli.into_settings()).unwrap();

    assert_eq!(config.api_key, "flag-key");
    assert_eq!(config.base_url, "http://localhost:9000/rest");
    assert_eq!(options.transport, Transport::Http);
    assert_eq!(options.bind.port(), 9100);
    assert!(options.skip_probe);

    clear_env();
}

#[test]
#[serial]
fn test_rejects_bad_probe_endpoint() {
    clear_env();

    let result = Cli::try_parse_from(["planfix-mcp", "--probe-endpoint", "DELETE task"]);

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_debug_accepts_numeric_and_word_values() {
    for (value, expected) in [("1", true), ("yes", true), ("on", true), ("0", false), ("off", false)] {
        clear_env();
        unsafe {
            env::set_var("DEBUG", value);
        }

        let cli = Cli::try_parse_from(["planfix-mcp", "acme", "secret"]).unwrap();

        assert_eq!(cli.debug, expected, "DEBUG={value}");
    }

    clear_env();
}

#[test]
#[serial]
fn test_debug_flag_without_env() {
    clear_env();

    let cli = Cli::try_parse_from(["planfix-mcp", "--debug", "acme", "secret"]).unwrap();

    assert!(cli.debug);
}

#[test]
fn test_default_filter() {
    assert_eq!(default_filter(false), "planfix_mcp=info");
    assert_eq!(default_filter(true), "planfix_mcp=debug");
}
