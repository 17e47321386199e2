//! Errors raised while handling a single MCP request.

use std::fmt;

use miette::Diagnostic;
use rmcp::ErrorData as McpError;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::trello::BoardError;

/// One argument that failed its declared shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "missing required field")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

#[derive(Error, Diagnostic, Debug)]
pub enum ToolError {
    #[error("Invalid arguments: {}", join_fields(.0))]
    #[diagnostic(code(trello_mcp::mcp::validation_failed))]
    Validation(Vec<FieldError>),

    #[error("Unknown tool: {0}")]
    #[diagnostic(code(trello_mcp::mcp::unknown_tool))]
    UnknownTool(String),

    #[error("Unknown resource: {0}")]
    #[diagnostic(code(trello_mcp::mcp::unknown_resource))]
    UnknownResource(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Remote(#[from] BoardError),
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<ToolError> for McpError {
    fn from(e: ToolError) -> Self {
        let message = e.to_string();
        match e {
            ToolError::Validation(errors) => {
                McpError::invalid_params(message, Some(json!({ "errors": errors })))
            }
            ToolError::UnknownTool(name) => {
                McpError::invalid_params(message, Some(json!({ "tool": name })))
            }
            ToolError::UnknownResource(uri) => {
                McpError::resource_not_found(message, Some(json!({ "uri": uri })))
            }
            ToolError::Remote(source) => McpError::internal_error(
                message,
                Some(json!({ "status": source.status() })),
            ),
        }
    }
}
