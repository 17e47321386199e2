use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, instrument};

use crate::config::Config;

use super::error::{BoardError, BoardResult};
use super::models::{Board, Card, CardUpdate, Comment, Lane};
use super::service::BoardService;

/// HTTP client for the Trello REST API.
///
/// Every request carries the API key and token as `key`/`token` query
/// parameters. There is no retry and no caching.
#[derive(Clone)]
pub struct TrelloClient {
    base_url: String,
    api_key: String,
    api_token: String,
    client: Client,
}

impl TrelloClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            api_token: config.api_token.clone(),
            client: Client::new(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `{base_url}/{segments...}`, percent-encoding each segment on its
    /// own so an identifier can never add, remove or escape a path segment.
    fn endpoint(&self, segments: &[&str]) -> BoardResult<Url> {
        let invalid_url = |message: String| BoardError::InvalidUrl {
            url: self.base_url.clone(),
            message,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid_url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid_url("cannot be a base URL".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> BoardResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        Ok(self
            .client
            .request(method, url)
            .query(&[("key", &self.api_key), ("token", &self.api_token)]))
    }

    fn get(&self, segments: &[&str]) -> BoardResult<RequestBuilder> {
        self.request(Method::GET, segments)
    }

    fn put(&self, segments: &[&str]) -> BoardResult<RequestBuilder> {
        self.request(Method::PUT, segments)
    }

    fn post(&self, segments: &[&str]) -> BoardResult<RequestBuilder> {
        self.request(Method::POST, segments)
    }

    /// Send a request and decode a 2xx JSON body, or surface status and body.
    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> BoardResult<T> {
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> BoardResult<T> {
        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await?;
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            debug!(status = status.as_u16(), "Trello request rejected");
            Err(BoardError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Identifiers are opaque, but empty, `.` and `..` would collapse into a
/// different path once the URL is normalized.
fn identifier(id: &str) -> BoardResult<&str> {
    match id {
        "" | "." | ".." => Err(BoardError::InvalidIdentifier { id: id.to_string() }),
        _ => Ok(id),
    }
}

#[async_trait]
impl BoardService for TrelloClient {
    #[instrument(skip(self))]
    async fn list_boards(&self) -> BoardResult<Vec<Board>> {
        Self::send(self.get(&["members", "me", "boards"])?).await
    }

    #[instrument(skip(self))]
    async fn get_board(&self, board_id: &str) -> BoardResult<Board> {
        Self::send(self.get(&["boards", identifier(board_id)?])?).await
    }

    #[instrument(skip(self))]
    async fn list_lanes(&self, board_id: &str) -> BoardResult<Vec<Lane>> {
        Self::send(
            self.get(&["boards", identifier(board_id)?, "lists"])?
                .query(&[("filter", "all")]),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn list_cards(&self, board_id: &str) -> BoardResult<Vec<Card>> {
        Self::send(self.get(&["boards", identifier(board_id)?, "cards"])?.query(&[
            ("members", "true"),
            ("labels", "all"),
            ("customFieldItems", "true"),
        ]))
        .await
    }

    #[instrument(skip(self))]
    async fn get_card(&self, card_id: &str) -> BoardResult<Card> {
        Self::send(self.get(&["cards", identifier(card_id)?])?.query(&[
            ("members", "true"),
            ("labels", "all"),
            ("attachments", "true"),
            ("actions", "commentCard"),
        ]))
        .await
    }

    #[instrument(skip(self))]
    async fn list_card_comments(&self, card_id: &str) -> BoardResult<Vec<Comment>> {
        Self::send(
            self.get(&["cards", identifier(card_id)?, "actions"])?
                .query(&[("filter", "commentCard")]),
        )
        .await
    }

    #[instrument(skip(self, update))]
    async fn update_card(&self, card_id: &str, update: &CardUpdate) -> BoardResult<Card> {
        Self::send(self.put(&["cards", identifier(card_id)?])?.json(update)).await
    }

    #[instrument(skip(self, text))]
    async fn add_comment(&self, card_id: &str, text: &str) -> BoardResult<Comment> {
        Self::send(
            self.post(&["cards", identifier(card_id)?, "actions", "comments"])?
                .json(&json!({ "text": text })),
        )
        .await
    }
}
