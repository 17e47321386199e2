//! Trello board service client.
//!
//! - `models`: pass-through shapes of boards, lists, cards and comments
//! - `error`: `BoardError`, raised for any failed round trip
//! - `service`: the `BoardService` trait the MCP layer depends on
//! - `client`: `TrelloClient`, the reqwest implementation

mod client;
mod error;
mod models;
mod service;

#[cfg(test)]
mod models_test;

pub use client::TrelloClient;
pub use error::{BoardError, BoardResult};
pub use models::*;
#[cfg(test)]
pub use service::MockBoardService;
pub use service::BoardService;
