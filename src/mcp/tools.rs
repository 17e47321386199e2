//! Tool catalog.
//!
//! The set of tools is closed: `ToolName` enumerates them, each with its
//! description and JSON input schema, and `ToolCall` is the validated,
//! typed form of an invocation that the server matches on exhaustively.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde::Deserialize;
use serde_json::{Value, json};

use super::error::{FieldError, ToolError};
use super::validation::validate;
use crate::trello::CardUpdate;

/// Sentinel accepted for `dueDate` meaning "remove the due date".
pub const CLEAR_DUE_DATE: &str = "null";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    ListBoards,
    ListCards,
    GetCard,
    GetLists,
    UpdateCard,
    AddComment,
}

impl ToolName {
    pub const ALL: [ToolName; 6] = [
        ToolName::ListBoards,
        ToolName::ListCards,
        ToolName::GetCard,
        ToolName::GetLists,
        ToolName::UpdateCard,
        ToolName::AddComment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::ListBoards => "list_boards",
            ToolName::ListCards => "list_cards",
            ToolName::GetCard => "get_card",
            ToolName::GetLists => "get_lists",
            ToolName::UpdateCard => "update_card",
            ToolName::AddComment => "add_comment",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolName::ListBoards => "List all Trello boards accessible to the authenticated user",
            ToolName::ListCards => "List all cards from a specific Trello board",
            ToolName::GetCard => {
                "Get detailed information about a specific Trello card, including description, comments, members, labels, and attachments"
            }
            ToolName::GetLists => {
                "Get all lists from a Trello board (useful for moving cards between lists)"
            }
            ToolName::UpdateCard => {
                "Update a Trello card (move to different list, update name, description, due date, etc.)"
            }
            ToolName::AddComment => "Add a comment to a Trello card",
        }
    }

    pub fn input_schema(self) -> JsonObject {
        let schema = match self {
            ToolName::ListBoards => json!({
                "type": "object",
                "properties": {}
            }),
            ToolName::ListCards | ToolName::GetLists => json!({
                "type": "object",
                "properties": {
                    "boardId": { "type": "string", "description": "The ID of the Trello board" }
                },
                "required": ["boardId"]
            }),
            ToolName::GetCard => json!({
                "type": "object",
                "properties": {
                    "cardId": { "type": "string", "description": "The ID or short URL of the Trello card" }
                },
                "required": ["cardId"]
            }),
            ToolName::UpdateCard => json!({
                "type": "object",
                "properties": {
                    "cardId": { "type": "string", "description": "The ID of the Trello card" },
                    "name": { "type": "string", "description": "New name for the card" },
                    "description": { "type": "string", "description": "New description for the card" },
                    "listId": { "type": "string", "description": "ID of the list to move the card to" },
                    "dueDate": {
                        "type": ["string", "null"],
                        "description": "Due date in ISO format (or null to remove)"
                    },
                    "dueComplete": { "type": "boolean", "description": "Whether the due date is complete" }
                },
                "required": ["cardId"]
            }),
            ToolName::AddComment => json!({
                "type": "object",
                "properties": {
                    "cardId": { "type": "string", "description": "The ID of the Trello card" },
                    "comment": { "type": "string", "description": "The comment text to add" }
                },
                "required": ["cardId", "comment"]
            }),
        };

        match schema {
            Value::Object(map) => map,
            _ => JsonObject::new(),
        }
    }

    pub fn to_tool(self) -> Tool {
        Tool::new(self.as_str(), self.description(), Arc::new(self.input_schema()))
    }
}

/// Every tool, in catalog order, as advertised by `tools/list`.
pub fn catalog() -> Vec<Tool> {
    ToolName::ALL.into_iter().map(ToolName::to_tool).collect()
}

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardParams {
    pub board_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardParams {
    pub card_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardParams {
    pub card_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub list_id: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    pub due_date: Option<Option<String>>,
    pub due_complete: Option<bool>,
}

impl UpdateCardParams {
    /// Sparse update carrying only the fields the caller supplied.
    ///
    /// `dueDate: null` and `dueDate: "null"` both clear the due date.
    pub fn to_update(&self) -> CardUpdate {
        CardUpdate {
            name: self.name.clone(),
            desc: self.description.clone(),
            id_list: self.list_id.clone(),
            due: self
                .due_date
                .as_ref()
                .map(|due| due.clone().filter(|d| d != CLEAR_DUE_DATE)),
            due_complete: self.due_complete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentParams {
    pub card_id: String,
    pub comment: String,
}

/// A validated tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    ListBoards,
    ListCards(BoardParams),
    GetCard(CardParams),
    GetLists(BoardParams),
    UpdateCard(UpdateCardParams),
    AddComment(AddCommentParams),
}

impl ToolCall {
    /// Resolve a tool by name and check its arguments.
    ///
    /// Nothing here touches the network, so a rejected call has no side
    /// effects.
    pub fn parse(name: &str, arguments: Option<JsonObject>) -> Result<Self, ToolError> {
        let tool = ToolName::from_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let args = arguments.unwrap_or_default();

        let mut errors = validate(&tool.input_schema(), &args).err().unwrap_or_default();
        errors.extend(content_errors(tool, &args));
        if !errors.is_empty() {
            return Err(ToolError::Validation(errors));
        }

        let call = match tool {
            ToolName::ListBoards => ToolCall::ListBoards,
            ToolName::ListCards => ToolCall::ListCards(decode(args)?),
            ToolName::GetCard => ToolCall::GetCard(decode(args)?),
            ToolName::GetLists => ToolCall::GetLists(decode(args)?),
            ToolName::UpdateCard => ToolCall::UpdateCard(decode(args)?),
            ToolName::AddComment => ToolCall::AddComment(decode(args)?),
        };

        Ok(call)
    }
}

/// Checks on argument values that the type-level schema cannot express.
fn content_errors(tool: ToolName, args: &JsonObject) -> Vec<FieldError> {
    match tool {
        ToolName::AddComment => match args.get("comment").and_then(Value::as_str) {
            Some(comment) if comment.trim().is_empty() => {
                vec![FieldError::new("comment", "must not be blank")]
            }
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn decode<T: serde::de::DeserializeOwned>(args: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(args))
        .map_err(|e| ToolError::Validation(vec![FieldError::new("arguments", e.to_string())]))
}
