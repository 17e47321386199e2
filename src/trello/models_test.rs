//! Tests for Trello model decoding and the sparse card update body.

use crate::trello::{Board, Card, CardUpdate, Comment};
use serde_json::json;

#[test]
fn card_decodes_with_sparse_payload() {
    let card: Card = serde_json::from_value(json!({
        "id": "c1",
        "name": "Bare card",
        "labels": [{ "id": "lb1", "name": "", "color": null }],
        "due": null
    }))
    .unwrap();

    assert_eq!(card.desc, "");
    assert!(card.members.is_empty());
    assert_eq!(card.labels[0].color, None);
    assert_eq!(card.badges.check_items, 0);
    assert!(!card.due_complete);
}

#[test]
fn comment_type_maps_to_kind() {
    let comment: Comment = serde_json::from_value(json!({
        "id": "a1",
        "type": "commentCard",
        "date": "2025-01-02T03:04:05.000Z",
        "memberCreator": { "id": "m1", "fullName": "Grace Hopper", "username": "grace" },
        "data": {}
    }))
    .unwrap();

    assert_eq!(comment.kind, "commentCard");
    assert_eq!(comment.member_creator.full_name, "Grace Hopper");
    assert_eq!(comment.data.text, None);
}

#[test]
fn board_serializes_with_remote_field_names() {
    let board = Board {
        id: "b1".to_string(),
        name: "Roadmap".to_string(),
        desc: String::new(),
        url: "https://trello.com/b/b1/roadmap".to_string(),
        short_url: "https://trello.com/b/b1".to_string(),
        closed: true,
    };

    let value = serde_json::to_value(&board).unwrap();
    assert_eq!(value["shortUrl"], "https://trello.com/b/b1");
    assert_eq!(value["closed"], true);
}

#[test]
fn empty_update_serializes_to_empty_object() {
    let update = CardUpdate::default();
    assert_eq!(serde_json::to_value(&update).unwrap(), json!({}));
}

#[test]
fn update_with_due_value_forwards_literal() {
    let update = CardUpdate {
        due: Some(Some("2025-01-01".to_string())),
        due_complete: Some(true),
        ..Default::default()
    };

    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({ "due": "2025-01-01", "dueComplete": true })
    );
}

#[test]
fn update_clearing_due_forwards_null() {
    let update = CardUpdate {
        due: Some(None),
        ..Default::default()
    };

    assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "due": null }));
}

#[test]
fn move_to_only_sets_list() {
    let update = CardUpdate::move_to("list-9");
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({ "idList": "list-9" })
    );
}
