use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named conversation thread between the user and the assistant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    /// Backend session id
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default = "Utc::now", deserialize_with = "super::deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now", deserialize_with = "super::deserialize_timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub message_count: Option<i64>,
}

impl ChatSession {
    /// Refresh the activity timestamp after a local exchange, without a re-fetch
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    /// Bump the message count by `n` when messages were appended locally
    pub fn bump_message_count(&mut self, n: i64) {
        self.message_count = Some(self.message_count.unwrap_or(0) + n);
    }
}
