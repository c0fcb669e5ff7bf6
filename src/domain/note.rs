use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{NoteContent, NoteId, timestamp};

/// Free-text note an advisor attached to a client.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientNote {
    pub id: NoteId,
    pub content: String,
    pub author: String,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
}

impl ClientNote {
    #[must_use]
    pub fn new(content: NoteContent, author: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            id: NoteId::generate(),
            content: content.into_inner(),
            author: author.into().trim().to_string(),
            created_at,
        }
    }
}
