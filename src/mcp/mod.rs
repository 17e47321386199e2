//! Model Context Protocol (MCP) server implementation
//!
//! Exposes the Trello board service as MCP tools and resources over stdio.
//!
//! - **server**: `TrelloMcpServer`, the `ServerHandler` and dispatcher
//! - **tools**: the closed tool catalog, input schemas and typed parameters
//! - **validation**: argument checking against a tool's input schema
//! - **render**: plain-text rendering of tool results
//! - **resources**: the resource catalog (`trello://boards`)
//!
//! The server is generic over `S: BoardService`, so the same dispatch code
//! runs against the HTTP client and against test doubles.

mod error;
pub mod render;
pub mod resources;
pub mod server;
pub mod tools;
mod validation;

#[cfg(test)]
mod tools_test;

pub use error::{FieldError, ToolError};
pub use server::TrelloMcpServer;
pub use validation::validate;
