//! Command-line entry point: parse flags, load credentials, serve MCP on stdio.

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rmcp::ServiceExt;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::mcp::TrelloMcpServer;
use crate::trello::TrelloClient;

#[cfg(test)]
mod cli_test;

const DEFAULT_LOG_FILTER: &str = "trello_mcp=info";

#[derive(Parser, Debug)]
#[command(name = "trello-mcp")]
#[command(author, version, about = "Trello MCP server over stdio", long_about = None)]
pub struct Cli {
    /// Override the Trello API URL (default: TRELLO_API_URL env or https://api.trello.com/1)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Tracing filter directives (default: RUST_LOG env or trello_mcp=info)
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Cli {
    /// Merge command-line overrides into the environment configuration.
    pub fn apply(&self, config: Config) -> Config {
        match &self.api_url {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }
}

/// Initialize tracing subscriber with env filter.
///
/// Logs go to stderr; stdout carries the protocol.
fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter.as_deref());

    // Fail before any protocol traffic when credentials are missing.
    let config = cli.apply(Config::from_env()?);

    let _ = rustls::crypto::ring::default_provider().install_default();

    info!(base_url = %config.base_url, "trello-mcp starting (stdio transport)");

    let server = TrelloMcpServer::new(TrelloClient::new(&config));
    let service = server
        .serve(rmcp::transport::io::stdio())
        .await
        .into_diagnostic()?;
    let reason = service.waiting().await.into_diagnostic()?;

    info!(?reason, "trello-mcp stopped");
    Ok(())
}
