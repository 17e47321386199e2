use crate::cli::Cli;
use crate::config::{Config, DEFAULT_API_URL};
use clap::Parser;

fn config() -> Config {
    Config {
        api_key: "key".to_string(),
        api_token: "token".to_string(),
        base_url: DEFAULT_API_URL.to_string(),
    }
}

#[test]
fn test_no_flags_keeps_env_config() {
    let cli = Cli::try_parse_from(["trello-mcp"]).unwrap();
    assert_eq!(cli.apply(config()), config());
    assert!(cli.log_filter.is_none());
}

#[test]
fn test_api_url_flag_overrides_base_url() {
    let cli = Cli::try_parse_from(["trello-mcp", "--api-url", "http://localhost:8080/1/"]).unwrap();
    assert_eq!(cli.apply(config()).base_url, "http://localhost:8080/1");
}

#[test]
fn test_log_filter_flag() {
    let cli = Cli::try_parse_from(["trello-mcp", "--log-filter", "trello_mcp=debug"]).unwrap();
    assert_eq!(cli.log_filter.as_deref(), Some("trello_mcp=debug"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["trello-mcp", "--bogus"]).is_err());
}
