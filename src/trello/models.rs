//! Trello API entities.
//!
//! Field names mirror the remote JSON (camelCase). Optional or nullable
//! remote fields default so that partially populated payloads still decode.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub short_url: String,
    #[serde(default)]
    pub closed: bool,
}

/// A column on a board. Trello calls these "lists".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lane {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub id_board: String,
    #[serde(default)]
    pub pos: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Badges {
    pub attachments: u32,
    pub comments: u32,
    pub check_items: u32,
    pub check_items_checked: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub short_url: String,
    #[serde(default)]
    pub id_list: String,
    #[serde(default)]
    pub id_board: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub due_complete: bool,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub badges: Badges,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentData {
    #[serde(default)]
    pub text: Option<String>,
}

/// A `commentCard` action on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub date: String,
    pub member_creator: Member,
    #[serde(default)]
    pub data: CommentData,
}

/// Sparse card update sent as the body of `PUT /cards/{id}`.
///
/// `None` leaves a field untouched. `due` is tri-state: `None` leaves the due
/// date alone, `Some(None)` clears it and `Some(Some(ts))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_list: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::serde_utils::serialize_double_option"
    )]
    pub due: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_complete: Option<bool>,
}

impl CardUpdate {
    /// Update that only moves the card to another list.
    pub fn move_to(list_id: impl Into<String>) -> Self {
        Self {
            id_list: Some(list_id.into()),
            ..Default::default()
        }
    }
}
