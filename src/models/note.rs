use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Notes of one year, keyed by week number.
pub type NoteMap = BTreeMap<u32, WeekNote>;

/// Free-text note attached to a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekNote {
    pub content: String,
    pub last_modified: DateTime<Utc>,
}

impl WeekNote {
    pub fn new(content: impl Into<String>, last_modified: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            last_modified,
        }
    }

    /// Whether the week should be marked as having a note.
    ///
    /// An empty note is still a stored record but is not marked.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}
