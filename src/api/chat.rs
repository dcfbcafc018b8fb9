//! Chat endpoints: send message, session and message listing, create, delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ChatMessage, ChatSession, MessageRole};

use super::auth::MessageResponse;
use super::{ApiClient, ApiError};

/// Request body for POST /chat/message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub session_id: i64,
    /// Free-text context hint for the assistant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Drive file ids to include in the assistant's context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_ids: Option<Vec<String>>,
}

impl ChatRequest {
    /// Build a plain request with no context hints.
    pub fn new(message: String, session_id: i64) -> Self {
        Self {
            message,
            session_id,
            context: None,
            file_ids: None,
        }
    }
}

/// The assistant's reply from POST /chat/message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Server-assigned id of the assistant message
    pub message_id: i64,
    pub content: String,
    #[serde(default)]
    pub role: String,
    #[serde(default = "Utc::now", deserialize_with = "crate::models::deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub file_references: Option<Vec<String>>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub streaming: bool,
}

impl ChatResponse {
    /// Convert the reply into a transcript message.
    pub fn into_message(self) -> ChatMessage {
        ChatMessage {
            id: self.message_id,
            role: MessageRole::parse(&self.role),
            content: self.content,
            file_references: self.file_references,
            metadata: self.metadata,
            created_at: self.timestamp,
            pending: false,
        }
    }
}

/// Response from GET /chat/sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionListResponse {
    pub sessions: Vec<ChatSession>,
    #[serde(default)]
    pub count: i64,
}

/// Response from GET /chat/sessions/{id}/messages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageListResponse {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub count: i64,
}

impl ApiClient {
    /// Send a chat message and wait for the assistant's reply.
    ///
    /// POST /chat/message
    pub async fn send_message(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.post_json("/chat/message", request).await
    }

    /// List the user's chat sessions.
    ///
    /// GET /chat/sessions
    pub async fn chat_sessions(&self) -> Result<SessionListResponse, ApiError> {
        self.get_json("/chat/sessions").await
    }

    /// Fetch the full message list of a session.
    ///
    /// GET /chat/sessions/{id}/messages
    pub async fn session_messages(&self, session_id: i64) -> Result<MessageListResponse, ApiError> {
        self.get_json(&format!("/chat/sessions/{}/messages", session_id))
            .await
    }

    /// Create a new chat session.
    ///
    /// POST /chat/sessions?title
    pub async fn create_session(&self, title: Option<&str>) -> Result<ChatSession, ApiError> {
        let path = match title {
            Some(t) => format!("/chat/sessions?title={}", urlencoding::encode(t)),
            None => "/chat/sessions".to_string(),
        };
        self.post_empty(&path).await
    }

    /// Delete a chat session.
    ///
    /// DELETE /chat/sessions/{id}
    pub async fn delete_session(&self, session_id: i64) -> Result<MessageResponse, ApiError> {
        self.delete_json(&format!("/chat/sessions/{}", session_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serialization_skips_empty_hints() {
        let request = ChatRequest::new("hello".to_string(), 5);
        let json = serde_json::to_string(&request).expect("Failed to serialize");

        assert!(json.contains("\"sessionId\":5"));
        assert!(!json.contains("context"));
        assert!(!json.contains("fileIds"));
    }

    #[test]
    fn test_chat_request_serialization_with_hints() {
        let request = ChatRequest {
            message: "summarize this".to_string(),
            session_id: 5,
            context: Some("viewing report.pdf".to_string()),
            file_ids: Some(vec!["abc".to_string()]),
        };
        let json = serde_json::to_string(&request).expect("Failed to serialize");

        assert!(json.contains("\"context\":\"viewing report.pdf\""));
        assert!(json.contains("\"fileIds\":[\"abc\"]"));
    }

    #[test]
    fn test_chat_response_into_message() {
        let json = r#"{
            "messageId": 88,
            "content": "Found three matches.",
            "role": "assistant",
            "timestamp": "2024-05-02T17:45:00",
            "fileReferences": ["f1"]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).expect("Failed to deserialize");
        let message = response.into_message();

        assert_eq!(message.id, 88);
        assert_eq!(message.role, MessageRole::Assistant);
        assert_eq!(message.content, "Found three matches.");
        assert_eq!(message.file_references.as_deref(), Some(&["f1".to_string()][..]));
        assert!(!message.pending);
    }

    #[test]
    fn test_chat_response_missing_role_defaults_to_assistant() {
        let json = r#"{"messageId": 1, "content": "ok"}"#;

        let response: ChatResponse = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(response.into_message().role, MessageRole::Assistant);
    }

    #[test]
    fn test_session_list_response_deserialize() {
        let json = r#"{
            "sessions": [
                {"id": 2, "title": "Second"},
                {"id": 1, "title": "First"}
            ],
            "count": 2
        }"#;

        let response: SessionListResponse =
            serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(response.sessions.len(), 2);
        assert_eq!(response.sessions[0].id, 2);
    }

    #[test]
    fn test_message_list_response_deserialize_empty() {
        let json = r#"{"messages": [], "count": 0}"#;

        let response: MessageListResponse =
            serde_json::from_str(json).expect("Failed to deserialize");
        assert!(response.messages.is_empty());
    }
}
