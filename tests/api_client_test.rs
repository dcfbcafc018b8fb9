//! Integration tests for the backend API client.
//!
//! Every endpoint is exercised against a wiremock server: happy paths,
//! error-body mapping, and the unauthorized observer.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use drivedeck::api::{ApiClient, ApiError, ChatRequest};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::with_base_url(server.uri())
}

// ============================================================================
// Auth endpoints
// ============================================================================

#[tokio::test]
async fn test_current_user_authenticated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "authenticated": true,
            "user": {
                "id": 12,
                "googleId": "g-12",
                "email": "rae@example.com",
                "name": "Rae Santos",
                "createdAt": "2024-02-01T08:00:00"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.current_user().await.expect("call should succeed");

    assert!(response.authenticated);
    let user = response.user.expect("user should be present");
    assert_eq!(user.id, 12);
    assert_eq!(user.email, "rae@example.com");
}

#[tokio::test]
async fn test_auth_status_unauthenticated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"authenticated": false})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.auth_status().await.expect("call should succeed");

    assert!(!response.authenticated);
    assert!(response.user.is_none());
}

#[tokio::test]
async fn test_logout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"message": "Logged out successfully"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.logout().await.expect("call should succeed");

    assert_eq!(response.message, "Logged out successfully");
}

// ============================================================================
// Drive endpoints
// ============================================================================

#[tokio::test]
async fn test_list_files_with_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drive/files"))
        .and(query_param("maxResults", "50"))
        .and(query_param(
            "query",
            "name contains 'plan' or fullText contains 'plan'",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": [
                {"id": "a", "name": "plan.txt", "mimeType": "text/plain", "size": 100, "isFolder": false}
            ],
            "count": 1,
            "query": "name contains 'plan' or fullText contains 'plan'"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .list_files(50, Some("name contains 'plan' or fullText contains 'plan'"))
        .await
        .expect("call should succeed");

    assert_eq!(response.files.len(), 1);
    assert_eq!(response.files[0].name, "plan.txt");
}

#[tokio::test]
async fn test_list_files_without_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drive/files"))
        .and(query_param("maxResults", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": [], "count": 0, "query": ""
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.list_files(5, None).await.expect("call should succeed");
    assert!(response.files.is_empty());
}

#[tokio::test]
async fn test_get_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drive/files/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "abc",
            "name": "report.pdf",
            "mimeType": "application/pdf",
            "isFolder": false,
            "webViewLink": "https://drive.example.com/abc"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let file = client.get_file("abc").await.expect("call should succeed");

    assert_eq!(file.id, "abc");
    assert_eq!(file.web_view_link.as_deref(), Some("https://drive.example.com/abc"));
}

#[tokio::test]
async fn test_get_file_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drive/files/abc/content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "fileId": "abc",
            "content": "The quarterly numbers are up."
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .get_file_content("abc")
        .await
        .expect("call should succeed");

    assert_eq!(response.file_id, "abc");
    assert!(response.content.contains("quarterly"));
}

#[tokio::test]
async fn test_get_file_content_not_extractable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drive/files/img/content"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "Content not available for this file type"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.get_file_content("img").await;

    match result {
        Err(ApiError::Server { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Content not available for this file type");
        }
        other => panic!("Expected server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_files_encodes_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drive/search"))
        .and(query_param("q", "q3 budget"))
        .and(query_param("maxResults", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": [], "count": 0, "query": "q3 budget"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .search_files("q3 budget", 10)
        .await
        .expect("call should succeed");
    assert_eq!(response.query, "q3 budget");
}

#[tokio::test]
async fn test_list_folders_with_parent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drive/folders"))
        .and(query_param("maxResults", "10"))
        .and(query_param("parentId", "root"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "folders": [{"id": "d1", "name": "Projects", "isFolder": true}],
            "count": 1,
            "parentId": "root"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .list_folders(Some("root"), 10)
        .await
        .expect("call should succeed");

    assert_eq!(response.folders.len(), 1);
    assert!(response.folders[0].is_folder);
}

// ============================================================================
// Chat endpoints
// ============================================================================

#[tokio::test]
async fn test_send_message_round_trip() {
    let server = MockServer::start().await;
    let request = ChatRequest {
        message: "summarize the report".to_string(),
        session_id: 3,
        context: Some("Viewing file: report.pdf".to_string()),
        file_ids: Some(vec!["abc".to_string()]),
    };

    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .and(body_json(serde_json::json!({
            "message": "summarize the report",
            "sessionId": 3,
            "context": "Viewing file: report.pdf",
            "fileIds": ["abc"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "messageId": 900,
            "content": "The report covers Q3.",
            "role": "assistant",
            "timestamp": "2024-05-02T17:45:00",
            "fileReferences": ["abc"]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .send_message(&request)
        .await
        .expect("call should succeed");

    assert_eq!(response.message_id, 900);
    assert_eq!(response.file_references.as_deref(), Some(&["abc".to_string()][..]));
}

#[tokio::test]
async fn test_chat_sessions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/chat/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sessions": [
                {"id": 2, "title": "Newer", "updatedAt": "2024-05-02T10:00:00"},
                {"id": 1, "title": "Older", "updatedAt": "2024-05-01T10:00:00"}
            ],
            "count": 2
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.chat_sessions().await.expect("call should succeed");

    assert_eq!(response.sessions.len(), 2);
    assert_eq!(response.sessions[0].title, "Newer");
}

#[tokio::test]
async fn test_session_messages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/chat/sessions/7/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "messages": [
                {"id": 1, "role": "user", "content": "hi", "createdAt": "2024-05-01T10:00:00"},
                {"id": 2, "role": "assistant", "content": "hello", "createdAt": "2024-05-01T10:00:05"}
            ],
            "count": 2
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .session_messages(7)
        .await
        .expect("call should succeed");

    assert_eq!(response.messages.len(), 2);
    assert_eq!(response.messages[0].content, "hi");
}

#[tokio::test]
async fn test_create_session_with_title() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat/sessions"))
        .and(query_param("title", "New Chat Session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 31,
            "title": "New Chat Session",
            "createdAt": "2024-05-03T12:00:00",
            "updatedAt": "2024-05-03T12:00:00"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let session = client
        .create_session(Some("New Chat Session"))
        .await
        .expect("call should succeed");

    assert_eq!(session.id, 31);
    assert_eq!(session.title, "New Chat Session");
}

#[tokio::test]
async fn test_delete_session() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/chat/sessions/31"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"message": "Session deleted successfully"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.delete_session(31).await.expect("call should succeed");
    assert_eq!(response.message, "Session deleted successfully");
}

// ============================================================================
// Error handling
// ============================================================================

#[tokio::test]
async fn test_server_error_body_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drive/files"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "Failed to list files: upstream quota exceeded"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.list_files(50, None).await;

    match result {
        Err(ApiError::Server { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("quota exceeded"));
        }
        other => panic!("Expected server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthorized_fires_observer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/chat/sessions"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"error": "User not authenticated"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let fired = Arc::new(AtomicUsize::new(0));
    let fired_clone = fired.clone();
    client.on_unauthorized(move || {
        fired_clone.fetch_add(1, Ordering::SeqCst);
    });

    let result = client.chat_sessions().await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unauthorized_fires_observer_from_any_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drive/files/x/content"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let fired = Arc::new(AtomicUsize::new(0));
    let fired_clone = fired.clone();
    client.on_unauthorized(move || {
        fired_clone.fetch_add(1, Ordering::SeqCst);
    });

    let _ = client.get_file_content("x").await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_non_401_does_not_fire_observer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/chat/sessions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let fired = Arc::new(AtomicUsize::new(0));
    let fired_clone = fired.clone();
    client.on_unauthorized(move || {
        fired_clone.fetch_add(1, Ordering::SeqCst);
    });

    let _ = client.chat_sessions().await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}
