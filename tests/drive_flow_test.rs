//! Integration tests for the file browser flow: list loading, the search
//! expression, refresh semantics, the 50-file cap, and the viewer.

use drivedeck::api::ApiClient;
use drivedeck::models::DriveFile;
use drivedeck::state::{search_expression, DriveState, PAGE_SIZE};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn files_body(n: usize) -> serde_json::Value {
    let files: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            serde_json::json!({
                "id": format!("f{}", i),
                "name": format!("file-{}.txt", i),
                "mimeType": "text/plain",
                "size": 100 + i,
                "isFolder": false
            })
        })
        .collect();
    serde_json::json!({"files": files, "count": n, "query": ""})
}

#[tokio::test]
async fn test_load_renders_exactly_n_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drive/files"))
        .and(query_param("maxResults", PAGE_SIZE.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(files_body(17)))
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri());
    let mut drive = DriveState::new();

    let seq = drive.begin_load(None);
    let response = client
        .list_files(PAGE_SIZE, None)
        .await
        .expect("call should succeed");
    assert!(drive.set_files(seq, response.files));

    assert_eq!(drive.files.len(), 17);
    assert!(!drive.is_empty());
}

#[tokio::test]
async fn test_empty_result_shows_empty_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drive/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(files_body(0)))
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri());
    let mut drive = DriveState::new();

    let seq = drive.begin_load(None);
    let response = client.list_files(PAGE_SIZE, None).await.unwrap();
    drive.set_files(seq, response.files);

    // Empty results are an empty state, not an error
    assert!(drive.is_empty());
    assert!(drive.error.is_none());
}

#[tokio::test]
async fn test_search_uses_name_or_fulltext_expression() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drive/files"))
        .and(query_param(
            "query",
            "name contains 'notes' or fullText contains 'notes'",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(files_body(2)))
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri());
    let mut drive = DriveState::new();

    let seq = drive.begin_load(Some("notes".to_string()));
    let expression = search_expression("notes");
    let response = client
        .list_files(PAGE_SIZE, Some(&expression))
        .await
        .expect("call should succeed");
    drive.set_files(seq, response.files);

    assert_eq!(drive.files.len(), 2);
    assert_eq!(drive.last_term.as_deref(), Some("notes"));
}

#[tokio::test]
async fn test_refresh_reissues_last_query_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drive/files"))
        .and(query_param(
            "query",
            "name contains 'plan' or fullText contains 'plan'",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(files_body(1)))
        .expect(2)
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri());
    let mut drive = DriveState::new();

    // Initial search
    let seq = drive.begin_load(Some("plan".to_string()));
    let expression = search_expression("plan");
    let response = client.list_files(PAGE_SIZE, Some(&expression)).await.unwrap();
    drive.set_files(seq, response.files);

    // Refresh repeats the remembered term
    let term = drive.last_term.clone();
    assert_eq!(term.as_deref(), Some("plan"));
    let seq = drive.begin_load(term.clone());
    let expression = search_expression(term.as_deref().unwrap());
    let response = client.list_files(PAGE_SIZE, Some(&expression)).await.unwrap();
    drive.set_files(seq, response.files);

    assert_eq!(drive.files.len(), 1);
}

#[tokio::test]
async fn test_server_error_is_surfaced_with_retry_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drive/files"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "Failed to list files: backend exploded"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri());
    let mut drive = DriveState::new();

    let seq = drive.begin_load(None);
    let error = client
        .list_files(PAGE_SIZE, None)
        .await
        .expect_err("call should fail");
    drive.set_error(seq, error.to_string());

    assert!(!drive.loading);
    assert!(drive
        .error
        .as_deref()
        .is_some_and(|e| e.contains("backend exploded")));
}

#[tokio::test]
async fn test_viewer_content_flow() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drive/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(files_body(1)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/drive/files/f0/content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "fileId": "f0",
            "content": "line one\nline two"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri());
    let mut drive = DriveState::new();

    let seq = drive.begin_load(None);
    let response = client.list_files(PAGE_SIZE, None).await.unwrap();
    drive.set_files(seq, response.files);

    // Opening a non-folder stages a content fetch
    let file_id = drive.open_selected().expect("file should want content");
    let content = client.get_file_content(&file_id).await.unwrap();
    drive.set_viewer_content(&content.file_id, content.content);

    let viewer = drive.viewer.as_ref().unwrap();
    assert!(!viewer.loading);
    assert_eq!(viewer.content.as_deref(), Some("line one\nline two"));
}

#[test]
fn test_folders_never_fetch_content() {
    let mut drive = DriveState::new();
    let folder: DriveFile = serde_json::from_str(
        r#"{"id": "d", "name": "Docs", "mimeType": "application/vnd.google-apps.folder", "isFolder": true}"#,
    )
    .unwrap();
    let seq = drive.begin_load(None);
    drive.set_files(seq, vec![folder]);

    assert!(drive.open_selected().is_none());
    assert!(drive.viewer.is_some());
}

#[test]
fn test_rapid_searches_keep_only_latest() {
    let mut drive = DriveState::new();

    let seq_a = drive.begin_load(Some("a".to_string()));
    let seq_ab = drive.begin_load(Some("ab".to_string()));

    let late: Vec<DriveFile> =
        serde_json::from_str(r#"[{"id": "old", "name": "old"}]"#).unwrap();
    let fresh: Vec<DriveFile> =
        serde_json::from_str(r#"[{"id": "new", "name": "new"}]"#).unwrap();

    // The fresher request resolves first; the older completion must not
    // clobber it afterwards
    assert!(drive.set_files(seq_ab, fresh));
    assert!(!drive.set_files(seq_a, late));

    assert_eq!(drive.files.len(), 1);
    assert_eq!(drive.files[0].id, "new");
}

#[test]
fn test_page_size_is_fifty() {
    // The fixed cap carried over from the web client; no pagination beyond it
    assert_eq!(PAGE_SIZE, 50);
}
