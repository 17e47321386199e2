//! Plain-text rendering of tool results.
//!
//! Summary counts always describe what is listed (open entries only), and
//! absent optional attributes are either left out or replaced by an explicit
//! marker.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::trello::{Board, Card, Comment, Label, Lane, Member};

pub const UNKNOWN_LIST: &str = "Unknown List";
const DONE_MARK: &str = " ✓";

/// Short `M/D/YYYY` form of a Trello timestamp (UTC calendar date).
///
/// Anything that is not RFC 3339 or a plain `YYYY-MM-DD` date is returned as-is.
pub fn format_date(raw: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn label_names(labels: &[Label]) -> Option<String> {
    let names: Vec<&str> = labels
        .iter()
        .map(|l| l.name.as_str())
        .filter(|n| !n.is_empty())
        .collect();
    (!names.is_empty()).then(|| names.join(", "))
}

fn member_names(members: &[Member]) -> Option<String> {
    let names: Vec<&str> = members
        .iter()
        .map(|m| m.full_name.as_str())
        .filter(|n| !n.is_empty())
        .collect();
    (!names.is_empty()).then(|| names.join(", "))
}

fn due_text(card: &Card) -> Option<String> {
    card.due.as_deref().map(|due| {
        let mark = if card.due_complete { DONE_MARK } else { "" };
        format!("{}{}", format_date(due), mark)
    })
}

pub fn boards(boards: &[Board]) -> String {
    let open: Vec<&Board> = boards.iter().filter(|b| !b.closed).collect();
    let listing = open
        .iter()
        .map(|b| format!("- {} (ID: {})\n  URL: {}", b.name, b.id, b.short_url))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Found {} active boards:\n\n{}", open.len(), listing)
}

pub fn lanes(lanes: &[Lane]) -> String {
    let open: Vec<&Lane> = lanes.iter().filter(|l| !l.closed).collect();
    let listing = open
        .iter()
        .map(|l| format!("- {} (ID: {})", l.name, l.id))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Found {} lists:\n\n{}", open.len(), listing)
}

pub fn cards(board: &Board, cards: &[Card], lanes: &[Lane]) -> String {
    let lane_names: HashMap<&str, &str> = lanes
        .iter()
        .map(|l| (l.id.as_str(), l.name.as_str()))
        .collect();

    let listing = cards
        .iter()
        .map(|card| {
            let lane = lane_names
                .get(card.id_list.as_str())
                .copied()
                .unwrap_or(UNKNOWN_LIST);

            let mut lines = vec![
                format!("- [{}] {}", lane, card.name),
                format!("  ID: {}", card.id),
                format!("  URL: {}", card.short_url),
            ];
            if let Some(labels) = label_names(&card.labels) {
                lines.push(format!("  Labels: {}", labels));
            }
            if let Some(members) = member_names(&card.members) {
                lines.push(format!("  Members: {}", members));
            }
            if let Some(due) = due_text(card) {
                lines.push(format!("  Due: {}", due));
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Board: {}\nFound {} cards:\n\n{}",
        board.name,
        cards.len(),
        listing
    )
}

pub fn card_detail(card: &Card, comments: &[Comment]) -> String {
    let description = if card.desc.is_empty() {
        "(No description)"
    } else {
        card.desc.as_str()
    };
    let labels = label_names(&card.labels)
        .map(|l| format!("Labels: {}", l))
        .unwrap_or_else(|| "No labels".to_string());
    let members = member_names(&card.members)
        .map(|m| format!("Members: {}", m))
        .unwrap_or_else(|| "No members assigned".to_string());
    let due = due_text(card)
        .map(|d| format!("Due Date: {}", d))
        .unwrap_or_else(|| "No due date".to_string());

    let mut out = format!(
        "Card: {name}\nID: {id}\nURL: {url}\n\nDescription:\n{description}\n\n{labels}\n{members}\n{due}\n\nAttachments: {attachments}\nComments: {comment_count}\nChecklist Items: {checked}/{total}",
        name = card.name,
        id = card.id,
        url = card.short_url,
        attachments = card.badges.attachments,
        comment_count = card.badges.comments,
        checked = card.badges.check_items_checked,
        total = card.badges.check_items,
    );

    if !comments.is_empty() {
        out.push_str("\n\nComments:\n");
        out.push_str(&comment_transcript(comments));
    }

    out
}

fn comment_transcript(comments: &[Comment]) -> String {
    comments
        .iter()
        .map(|c| {
            format!(
                "- {} ({}):\n  {}",
                c.member_creator.full_name,
                format_date(&c.date),
                c.data.text.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn updated_card(card: &Card) -> String {
    format!(
        "Successfully updated card: {}\nURL: {}",
        card.name, card.short_url
    )
}

pub fn comment_added(card_id: &str) -> String {
    format!("Successfully added comment to card {}", card_id)
}
