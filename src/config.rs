//! Process configuration.
//!
//! Credentials come from the environment (optionally seeded from a `.env`
//! file). The server refuses to start without both of them.

use miette::Diagnostic;
use thiserror::Error;

pub const API_KEY_VAR: &str = "TRELLO_API_KEY";
pub const API_TOKEN_VAR: &str = "TRELLO_API_TOKEN";
pub const API_URL_VAR: &str = "TRELLO_API_URL";

/// Trello v1 API root.
pub const DEFAULT_API_URL: &str = "https://api.trello.com/1";

#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{} must be set in environment variables", .vars.join(" and "))]
    #[diagnostic(
        code(trello_mcp::config::missing),
        help("Create an API key and token at https://trello.com/power-ups/admin and export them, or put them in a .env file.")
    )]
    Missing { vars: Vec<&'static str> },

    #[error("Failed to load .env file: {message}")]
    #[diagnostic(
        code(trello_mcp::config::env_file),
        help("Fix or remove the .env file in the working directory.")
    )]
    EnvFile { message: String },
}

/// Resolved settings for talking to the Trello API.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub api_token: String,
    pub base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first when present;
    /// variables already set in the environment win.
    pub fn from_env() -> Result<Self, ConfigError> {
        check_env_file(dotenvy::dotenv())?;
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Blank values count as missing. Every missing credential is reported,
    /// not just the first one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_blank(API_KEY_VAR);
        let api_token = non_blank(API_TOKEN_VAR);

        let mut missing = Vec::new();
        if api_key.is_none() {
            missing.push(API_KEY_VAR);
        }
        if api_token.is_none() {
            missing.push(API_TOKEN_VAR);
        }

        match (api_key, api_token) {
            (Some(api_key), Some(api_token)) => Ok(Self {
                api_key,
                api_token,
                base_url: normalize_base_url(
                    non_blank(API_URL_VAR).as_deref().unwrap_or(DEFAULT_API_URL),
                ),
            }),
            _ => Err(ConfigError::Missing { vars: missing }),
        }
    }

    /// Replace the API root, e.g. from a command-line override.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }
}

/// A missing `.env` file is fine; an unreadable or malformed one is not.
pub fn check_env_file<T>(loaded: Result<T, dotenvy::Error>) -> Result<(), ConfigError> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::EnvFile {
            message: e.to_string(),
        }),
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
