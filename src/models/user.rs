use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated user, as returned by the auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend user id
    pub id: i64,
    /// External account id from the OAuth provider
    #[serde(default)]
    pub google_id: String,
    pub email: String,
    pub name: String,
    /// When the account was first seen
    #[serde(default = "Utc::now", deserialize_with = "super::deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// First word of the display name, for the dashboard greeting
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("User")
    }
}
