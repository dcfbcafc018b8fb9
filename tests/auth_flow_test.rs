//! Integration tests for the authentication state machine over real
//! (mocked) HTTP round-trips.

use drivedeck::api::ApiClient;
use drivedeck::state::AuthState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authenticated_body() -> serde_json::Value {
    serde_json::json!({
        "authenticated": true,
        "user": {"id": 5, "email": "io@example.com", "name": "Io Vega"}
    })
}

#[tokio::test]
async fn test_check_success_transitions_to_authenticated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(authenticated_body()))
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri());
    let mut auth = AuthState::new();
    assert!(auth.is_loading);

    let response = client.current_user().await.expect("call should succeed");
    auth.apply_status(response);

    assert!(auth.is_authenticated);
    assert!(!auth.is_loading);
    assert_eq!(auth.user.as_ref().map(|u| u.name.as_str()), Some("Io Vega"));
    assert!(auth.error.is_none());
}

#[tokio::test]
async fn test_check_unauthenticated_carries_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "authenticated": false,
            "error": "token revoked"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri());
    let mut auth = AuthState::new();

    let response = client.current_user().await.expect("call should succeed");
    auth.apply_status(response);

    assert!(!auth.is_authenticated);
    assert_eq!(auth.error.as_deref(), Some("token revoked"));
}

#[tokio::test]
async fn test_check_failure_then_success_transitions_cleanly() {
    // First check: no server at all, a transport failure
    let dead_client = ApiClient::with_base_url("http://127.0.0.1:1".to_string());
    let mut auth = AuthState::new();

    auth.begin_check();
    let error = dead_client
        .current_user()
        .await
        .expect_err("call should fail");
    auth.apply_check_error(error.to_string());

    assert!(!auth.is_authenticated);
    assert!(!auth.is_loading);
    assert!(auth.error.as_deref().is_some_and(|e| !e.is_empty()));

    // Second check against a live server succeeds and clears the error
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(authenticated_body()))
        .mount(&server)
        .await;
    let client = ApiClient::with_base_url(server.uri());

    auth.begin_check();
    assert!(auth.is_loading);
    assert!(auth.error.is_none());

    let response = client.current_user().await.expect("call should succeed");
    auth.apply_status(response);

    assert!(auth.is_authenticated);
    assert!(auth.error.is_none());
}

#[tokio::test]
async fn test_logout_success_resets_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(authenticated_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"message": "Logged out successfully"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri());
    let mut auth = AuthState::new();
    auth.apply_status(client.current_user().await.unwrap());
    assert!(auth.is_authenticated);

    let error = client.logout().await.err().map(|e| e.to_string());
    auth.apply_logout(error);

    assert!(!auth.is_authenticated);
    assert!(auth.user.is_none());
    assert!(auth.error.is_none());
}

#[tokio::test]
async fn test_logout_failure_still_clears_local_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(authenticated_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "session store unavailable"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri());
    let mut auth = AuthState::new();
    auth.apply_status(client.current_user().await.unwrap());

    let error = client.logout().await.err().map(|e| e.to_string());
    auth.apply_logout(error);

    // The user is signed out locally either way; the failure is surfaced
    assert!(!auth.is_authenticated);
    assert!(auth.user.is_none());
    assert!(auth
        .error
        .as_deref()
        .is_some_and(|e| e.contains("session store unavailable")));
}
