use miette::Diagnostic;
use thiserror::Error;

/// Failures talking to the Trello API. None of these are retried.
#[derive(Error, Diagnostic, Debug)]
pub enum BoardError {
    #[error("Trello API error ({status}): {body}")]
    #[diagnostic(code(trello_mcp::trello::api_error))]
    Api { status: u16, body: String },

    #[error("Failed to reach the Trello API: {source}")]
    #[diagnostic(
        code(trello_mcp::trello::transport),
        help("Check network connectivity and the TRELLO_API_URL setting.")
    )]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid Trello identifier: {id:?}")]
    #[diagnostic(code(trello_mcp::trello::invalid_identifier))]
    InvalidIdentifier { id: String },

    #[error("Invalid Trello API URL {url}: {message}")]
    #[diagnostic(
        code(trello_mcp::trello::invalid_url),
        help("TRELLO_API_URL must be an absolute http(s) URL.")
    )]
    InvalidUrl { url: String, message: String },

    #[error("Invalid response from the Trello API: {message}")]
    #[diagnostic(code(trello_mcp::trello::invalid_response))]
    InvalidResponse { message: String },
}

impl BoardError {
    /// HTTP status of the failed request, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            BoardError::Api { status, .. } => Some(*status),
            BoardError::Transport { source } => source.status().map(|s| s.as_u16()),
            BoardError::InvalidIdentifier { .. }
            | BoardError::InvalidUrl { .. }
            | BoardError::InvalidResponse { .. } => None,
        }
    }
}

impl From<reqwest::Error> for BoardError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            BoardError::InvalidResponse {
                message: e.to_string(),
            }
        } else {
            BoardError::Transport { source: e }
        }
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        BoardError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type BoardResult<T> = Result<T, BoardError>;
