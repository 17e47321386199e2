//! MCP server implementation
//!
//! Dispatches tool calls and resource reads onto a `BoardService` and renders
//! the results.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::*,
    service::RequestContext,
};
use tracing::{info, warn};

use crate::trello::{BoardError, BoardResult, BoardService};

use super::error::ToolError;
use super::render;
use super::resources::{self, JSON_MIME_TYPE, ResourceName};
use super::tools::{self, AddCommentParams, BoardParams, CardParams, ToolCall, UpdateCardParams};

pub const SERVER_NAME: &str = "trello-mcp";

/// Trello MCP server
///
/// Generic over `S: BoardService` so tests can run it against a mock or an
/// in-memory board. Holds no state between requests.
pub struct TrelloMcpServer<S: BoardService> {
    service: Arc<S>,
}

impl<S: BoardService> Clone for TrelloMcpServer<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<S: BoardService + 'static> TrelloMcpServer<S> {
    pub fn new(service: impl Into<Arc<S>>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// Validate and run a tool by name, returning its rendered text.
    pub async fn run_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<String, ToolError> {
        let call = ToolCall::parse(name, arguments)?;
        Ok(self.execute(call).await?)
    }

    /// Run an already validated call.
    pub async fn execute(&self, call: ToolCall) -> BoardResult<String> {
        match call {
            ToolCall::ListBoards => self.list_boards().await,
            ToolCall::ListCards(params) => self.list_cards(params).await,
            ToolCall::GetCard(params) => self.get_card(params).await,
            ToolCall::GetLists(params) => self.get_lists(params).await,
            ToolCall::UpdateCard(params) => self.update_card(params).await,
            ToolCall::AddComment(params) => self.add_comment(params).await,
        }
    }

    /// Read a resource by URI, returning its JSON text.
    pub async fn read(&self, uri: &str) -> Result<String, ToolError> {
        let resource =
            ResourceName::from_uri(uri).ok_or_else(|| ToolError::UnknownResource(uri.to_string()))?;

        match resource {
            ResourceName::Boards => {
                let boards = self.service.list_boards().await?;
                Ok(serde_json::to_string_pretty(&boards).map_err(BoardError::from)?)
            }
        }
    }

    /// Protocol-level tool call.
    ///
    /// Board service failures become an error tool result carrying the
    /// status and body. Validation and unknown-tool failures are protocol
    /// errors, raised before any remote call.
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = %name, "tool call");

        match self.run_tool(name, arguments).await {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(ToolError::Remote(e)) => {
                warn!(tool = %name, error = %e, "tool call failed");
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error: {}",
                    e
                ))]))
            }
            Err(e) => {
                warn!(tool = %name, error = %e, "tool call rejected");
                Err(e.into())
            }
        }
    }

    /// Protocol-level resource read.
    pub async fn read_resource_uri(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        info!(uri = %uri, "resource read");
        let text = self.read(uri).await?;

        let mut contents = ResourceContents::text(text, uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(JSON_MIME_TYPE.to_string());
        }

        Ok(ReadResourceResult::new(vec![contents]))
    }

    async fn list_boards(&self) -> BoardResult<String> {
        let boards = self.service.list_boards().await?;
        Ok(render::boards(&boards))
    }

    async fn list_cards(&self, params: BoardParams) -> BoardResult<String> {
        let board_id = params.board_id.as_str();
        let (cards, lanes, board) = tokio::try_join!(
            self.service.list_cards(board_id),
            self.service.list_lanes(board_id),
            self.service.get_board(board_id),
        )?;
        Ok(render::cards(&board, &cards, &lanes))
    }

    async fn get_card(&self, params: CardParams) -> BoardResult<String> {
        let card_id = params.card_id.as_str();
        let (card, comments) = tokio::try_join!(
            self.service.get_card(card_id),
            self.service.list_card_comments(card_id),
        )?;
        Ok(render::card_detail(&card, &comments))
    }

    async fn get_lists(&self, params: BoardParams) -> BoardResult<String> {
        let lanes = self.service.list_lanes(&params.board_id).await?;
        Ok(render::lanes(&lanes))
    }

    async fn update_card(&self, params: UpdateCardParams) -> BoardResult<String> {
        let update = params.to_update();
        let card = self.service.update_card(&params.card_id, &update).await?;
        Ok(render::updated_card(&card))
    }

    async fn add_comment(&self, params: AddCommentParams) -> BoardResult<String> {
        self.service
            .add_comment(&params.card_id, &params.comment)
            .await?;
        Ok(render::comment_added(&params.card_id))
    }
}

impl<S: BoardService + 'static> ServerHandler for TrelloMcpServer<S> {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::new(
            ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
        )
        .with_instructions(
            "Trello MCP Server - List boards, lists and cards, inspect card details, update cards and add comments. Use get_lists to find list IDs before moving a card with update_card.",
        );
        info.server_info.name = SERVER_NAME.to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(tools::catalog()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.call(&request.name, request.arguments).await
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(resources::catalog()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read_resource_uri(&request.uri).await
    }
}
