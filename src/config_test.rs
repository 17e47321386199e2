use crate::config::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_loads_credentials_with_default_url() {
    let config =
        Config::from_lookup(lookup_from(&[(API_KEY_VAR, "key"), (API_TOKEN_VAR, "token")]))
            .unwrap();

    assert_eq!(config.api_key, "key");
    assert_eq!(config.api_token, "token");
    assert_eq!(config.base_url, DEFAULT_API_URL);
}

#[test]
fn test_missing_both_credentials_names_both() {
    let err = Config::from_lookup(lookup_from(&[])).unwrap_err();

    assert_eq!(
        err,
        ConfigError::Missing {
            vars: vec![API_KEY_VAR, API_TOKEN_VAR]
        }
    );
    assert_eq!(
        err.to_string(),
        "TRELLO_API_KEY and TRELLO_API_TOKEN must be set in environment variables"
    );
}

#[test]
fn test_blank_token_counts_as_missing() {
    let err = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "key"), (API_TOKEN_VAR, "   ")]))
        .unwrap_err();

    assert_eq!(
        err,
        ConfigError::Missing {
            vars: vec![API_TOKEN_VAR]
        }
    );
}

#[test]
fn test_url_override_is_trimmed() {
    let config = Config::from_lookup(lookup_from(&[
        (API_KEY_VAR, "key"),
        (API_TOKEN_VAR, "token"),
        (API_URL_VAR, "http://localhost:9999/1/"),
    ]))
    .unwrap();

    assert_eq!(config.base_url, "http://localhost:9999/1");
    assert_eq!(
        config.with_base_url("http://other/").base_url,
        "http://other"
    );
}

#[test]
fn test_debug_redacts_secrets() {
    let config = Config::from_lookup(lookup_from(&[
        (API_KEY_VAR, "super-secret-key"),
        (API_TOKEN_VAR, "super-secret-token"),
    ]))
    .unwrap();

    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
fn test_absent_env_file_is_ignored() {
    let absent = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));

    assert_eq!(check_env_file::<()>(Err(absent)), Ok(()));
    assert_eq!(check_env_file(Ok(())), Ok(()));
}

#[test]
fn test_malformed_env_file_is_reported() {
    let malformed = dotenvy::Error::LineParse("TRELLO_API_KEY key".to_string(), 15);

    let err = check_env_file::<()>(Err(malformed)).unwrap_err();

    assert!(matches!(err, ConfigError::EnvFile { .. }));
    assert!(err.to_string().starts_with("Failed to load .env file:"));
}

#[test]
fn test_unreadable_env_file_is_reported() {
    let denied = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));

    assert!(matches!(
        check_env_file::<()>(Err(denied)),
        Err(ConfigError::EnvFile { .. })
    ));
}
