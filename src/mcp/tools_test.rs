//! Tests for the tool catalog and invocation parsing.

use crate::mcp::{FieldError, ToolError};
use crate::mcp::tools::*;
use crate::trello::CardUpdate;
use rmcp::model::JsonObject;
use serde_json::json;

fn args(value: serde_json::Value) -> Option<JsonObject> {
    value.as_object().cloned()
}

#[test]
fn catalog_lists_every_tool_once() {
    let names: Vec<String> = catalog().iter().map(|t| t.name.to_string()).collect();
    assert_eq!(
        names,
        vec![
            "list_boards",
            "list_cards",
            "get_card",
            "get_lists",
            "update_card",
            "add_comment"
        ]
    );
}

#[test]
fn names_round_trip_through_from_name() {
    for tool in ToolName::ALL {
        assert_eq!(ToolName::from_name(tool.as_str()), Some(tool));
    }
    assert_eq!(ToolName::from_name("delete_board"), None);
}

#[test]
fn schemas_declare_required_fields() {
    let schema = ToolName::AddComment.input_schema();
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["required"], json!(["cardId", "comment"]));

    let schema = ToolName::ListBoards.input_schema();
    assert!(schema.get("required").is_none());
}

#[test]
fn parse_unknown_tool() {
    let err = ToolCall::parse("archive_board", None).unwrap_err();
    assert!(matches!(err, ToolError::UnknownTool(ref name) if name == "archive_board"));
    assert_eq!(err.to_string(), "Unknown tool: archive_board");
}

#[test]
fn parse_list_boards_without_arguments() {
    assert_eq!(ToolCall::parse("list_boards", None).unwrap(), ToolCall::ListBoards);
}

#[test]
fn parse_missing_board_id_names_field() {
    let err = ToolCall::parse("list_cards", args(json!({}))).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid arguments: boardId: missing required field"
    );
}

#[test]
fn parse_get_lists() {
    let call = ToolCall::parse("get_lists", args(json!({ "boardId": "b1" }))).unwrap();
    assert_eq!(
        call,
        ToolCall::GetLists(BoardParams {
            board_id: "b1".to_string()
        })
    );
}

#[test]
fn parse_blank_comment_is_rejected() {
    let err =
        ToolCall::parse("add_comment", args(json!({ "cardId": "c1", "comment": "   " }))).unwrap_err();
    assert_eq!(err.to_string(), "Invalid arguments: comment: must not be blank");
}

#[test]
fn parse_reports_blank_comment_with_missing_card() {
    let err = ToolCall::parse("add_comment", args(json!({ "comment": "  " }))).unwrap_err();
    match err {
        ToolError::Validation(errors) => assert_eq!(
            errors,
            vec![
                FieldError::missing("cardId"),
                FieldError::new("comment", "must not be blank")
            ]
        ),
        other => panic!("Expected validation error, got {other:?}"),
    }
}

fn update_for(value: serde_json::Value) -> CardUpdate {
    match ToolCall::parse("update_card", args(value)).unwrap() {
        ToolCall::UpdateCard(params) => params.to_update(),
        other => panic!("Expected UpdateCard, got {other:?}"),
    }
}

#[test]
fn update_without_due_date_leaves_due_untouched() {
    let update = update_for(json!({ "cardId": "c1", "name": "Renamed" }));
    assert_eq!(update.due, None);
    assert_eq!(update.name.as_deref(), Some("Renamed"));
    assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "name": "Renamed" }));
}

#[test]
fn update_with_null_sentinel_clears_due_date() {
    let update = update_for(json!({ "cardId": "c1", "dueDate": "null" }));
    assert_eq!(update.due, Some(None));
    assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "due": null }));
}

#[test]
fn update_with_json_null_clears_due_date() {
    let update = update_for(json!({ "cardId": "c1", "dueDate": null }));
    assert_eq!(update.due, Some(None));
}

#[test]
fn update_with_date_forwards_literal() {
    let update = update_for(json!({ "cardId": "c1", "dueDate": "2025-01-01" }));
    assert_eq!(update.due, Some(Some("2025-01-01".to_string())));
}

#[test]
fn update_maps_caller_names_to_trello_fields() {
    let update = update_for(json!({
        "cardId": "c1",
        "description": "Details",
        "listId": "l2",
        "dueComplete": false
    }));

    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({ "desc": "Details", "idList": "l2", "dueComplete": false })
    );
}
