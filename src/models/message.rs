use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl MessageRole {
    /// Parse a role from the backend's string form, defaulting to Assistant
    pub fn parse(s: &str) -> Self {
        match s {
            "user" => MessageRole::User,
            "system" => MessageRole::System,
            _ => MessageRole::Assistant,
        }
    }

    /// Display label for the transcript
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::User => "You",
            MessageRole::Assistant => "Assistant",
            MessageRole::System => "System",
        }
    }
}

/// A message within a chat session.
///
/// Messages form an append-only sequence ordered by creation. A message
/// inserted optimistically before the server round-trip completes carries a
/// provisional negative id and `pending = true` until it is confirmed or
/// rolled back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Message id from the backend; negative for pending local inserts
    pub id: i64,
    pub role: MessageRole,
    pub content: String,
    /// Drive file ids the assistant referenced in this reply
    #[serde(default)]
    pub file_references: Option<Vec<String>>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default = "Utc::now", deserialize_with = "super::deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    /// True while this record awaits server confirmation; never on the wire
    #[serde(skip)]
    pub pending: bool,
}

impl ChatMessage {
    /// Build the optimistic local record for a user-authored message
    pub fn local_user(provisional_id: i64, content: String) -> Self {
        Self {
            id: provisional_id,
            role: MessageRole::User,
            content,
            file_references: None,
            metadata: None,
            created_at: Utc::now(),
            pending: true,
        }
    }

    /// Mark this record as confirmed by the server
    pub fn confirm(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(MessageRole::parse("user"), MessageRole::User);
        assert_eq!(MessageRole::parse("assistant"), MessageRole::Assistant);
        assert_eq!(MessageRole::parse("system"), MessageRole::System);
        assert_eq!(MessageRole::parse("tool"), MessageRole::Assistant);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&MessageRole::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&MessageRole::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_message_deserialize() {
        let json = r#"{
            "id": 101,
            "role": "assistant",
            "content": "Here is what I found.",
            "fileReferences": ["abc", "def"],
            "createdAt": "2024-05-02T17:45:00"
        }"#;

        let message: ChatMessage = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(message.id, 101);
        assert_eq!(message.role, MessageRole::Assistant);
        assert_eq!(message.file_references.as_deref(), Some(&["abc".to_string(), "def".to_string()][..]));
        // Client-only field defaults to false off the wire
        assert!(!message.pending);
    }

    #[test]
    fn test_local_user_is_pending() {
        let message = ChatMessage::local_user(-1, "hello".to_string());
        assert_eq!(message.id, -1);
        assert_eq!(message.role, MessageRole::User);
        assert!(message.pending);
    }

    #[test]
    fn test_confirm_clears_pending() {
        let mut message = ChatMessage::local_user(-2, "hello".to_string());
        message.confirm();
        assert!(!message.pending);
    }

    #[test]
    fn test_pending_not_serialized() {
        let message = ChatMessage::local_user(-1, "hello".to_string());
        let json = serde_json::to_string(&message).expect("Failed to serialize");
        assert!(!json.contains("pending"));
    }
}
