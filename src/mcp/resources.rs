//! Resource catalog: a single read-only view of every board.

use rmcp::model::{AnnotateAble, RawResource, Resource};

pub const BOARDS_URI: &str = "trello://boards";
pub const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceName {
    Boards,
}

impl ResourceName {
    pub fn from_uri(uri: &str) -> Option<Self> {
        match uri {
            BOARDS_URI => Some(ResourceName::Boards),
            _ => None,
        }
    }

    pub fn uri(self) -> &'static str {
        match self {
            ResourceName::Boards => BOARDS_URI,
        }
    }

    pub fn to_resource(self) -> Resource {
        match self {
            ResourceName::Boards => {
                let mut raw = RawResource::new(self.uri(), "All Trello Boards");
                raw.description = Some("List of all accessible Trello boards".to_string());
                raw.mime_type = Some(JSON_MIME_TYPE.to_string());
                raw.no_annotation()
            }
        }
    }
}

pub fn catalog() -> Vec<Resource> {
    vec![ResourceName::Boards.to_resource()]
}
