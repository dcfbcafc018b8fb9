pub mod file;
pub mod message;
pub mod session;
pub mod user;

pub use file::DriveFile;
pub use message::{ChatMessage, MessageRole};
pub use session::ChatSession;
pub use user::User;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Helper to deserialize backend timestamps.
///
/// The backend emits `LocalDateTime` values without a zone offset
/// (e.g. "2024-06-01T10:30:00"), while drive metadata uses full RFC 3339.
/// Both are accepted; zoneless values are taken as UTC.
pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_timestamp(&value).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid timestamp: {}", value))
    })
}

/// Parse a timestamp string in either RFC 3339 or zoneless form.
pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
