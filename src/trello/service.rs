//! Board service abstraction.
//!
//! The MCP layer only talks to this trait so tests can substitute a mock or
//! an in-memory fake for the HTTP client.

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::error::BoardResult;
use super::models::{Board, Card, CardUpdate, Comment, Lane};

/// One method per Trello round trip.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BoardService: Send + Sync {
    /// Boards of the authenticated member, in API order.
    async fn list_boards(&self) -> BoardResult<Vec<Board>>;

    async fn get_board(&self, board_id: &str) -> BoardResult<Board>;

    /// All lists on a board, closed ones included.
    async fn list_lanes(&self, board_id: &str) -> BoardResult<Vec<Lane>>;

    /// Cards on a board with members and labels expanded.
    async fn list_cards(&self, board_id: &str) -> BoardResult<Vec<Card>>;

    async fn get_card(&self, card_id: &str) -> BoardResult<Card>;

    /// `commentCard` actions on a card, in API order.
    async fn list_card_comments(&self, card_id: &str) -> BoardResult<Vec<Comment>>;

    async fn update_card(&self, card_id: &str, update: &CardUpdate) -> BoardResult<Card>;

    async fn add_comment(&self, card_id: &str, text: &str) -> BoardResult<Comment>;

    /// Move a card to another list.
    async fn move_card(&self, card_id: &str, list_id: &str) -> BoardResult<Card> {
        self.update_card(card_id, &CardUpdate::move_to(list_id))
            .await
    }
}
