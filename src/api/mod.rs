//! Typed client for the Drive-AI backend HTTP API.
//!
//! All backend operations go through [`ApiClient`]: one async method per
//! endpoint, uniform `/api` base path, a client-wide request timeout, and
//! cookie-jar session transport. A 401 from any call is routed to the
//! observer registered with [`ApiClient::on_unauthorized`]; the client
//! itself never decides what "log in again" means for the application.

mod auth;
mod chat;
mod drive;

pub use auth::{AuthStatusResponse, MessageResponse};
pub use chat::{ChatRequest, ChatResponse, MessageListResponse, SessionListResponse};
pub use drive::{FileContentResponse, FileListResponse, FolderListResponse};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use thiserror::Error;

/// Default backend base URL (the Spring dev server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client-wide request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Observer invoked when any call returns 401
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Error type for backend API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),
    /// Could not reach the backend
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// The server rejected the session (HTTP 401)
    #[error("Not authenticated")]
    Unauthorized,
    /// Server returned a non-2xx status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// Other transport-level failure
    #[error("HTTP error: {0}")]
    Http(String),
}

impl ApiError {
    /// Convert a reqwest error into the matching variant
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err.to_string())
        } else if err.is_connect() {
            ApiError::ConnectionFailed(err.to_string())
        } else {
            ApiError::Http(err.to_string())
        }
    }
}

/// Error body the backend attaches to non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the Drive-AI backend API.
///
/// Holds a reusable `reqwest::Client` with a cookie store, so the session
/// cookie established by the browser login flow is carried on every call.
pub struct ApiClient {
    /// Base URL of the backend (without the `/api` prefix)
    base_url: String,
    /// Reusable HTTP client
    client: reqwest::Client,
    /// Observer fired on any 401 response
    on_unauthorized: RwLock<Option<UnauthorizedHook>>,
}

impl ApiClient {
    /// Create a new ApiClient with the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a new ApiClient with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .cookie_store(true)
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            on_unauthorized: RwLock::new(None),
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The server-driven login page, to be opened in the system browser.
    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    /// Register the observer invoked whenever any call returns 401.
    ///
    /// The application registers exactly one hook at startup; registering
    /// again replaces the previous hook.
    pub fn on_unauthorized<F>(&self, hook: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        if let Ok(mut slot) = self.on_unauthorized.write() {
            *slot = Some(Arc::new(hook));
        }
    }

    /// Build a full URL under the `/api` prefix.
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.api_url(path))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        self.read_json(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.api_url(path))
            .json(body)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        self.read_json(response).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.api_url(path))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        self.read_json(response).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .delete(self.api_url(path))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        self.read_json(response).await
    }

    /// Shared response handling: 401 fires the observer, other non-2xx
    /// statuses surface the backend's `{"error": ...}` message, success
    /// parses the typed body.
    async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status().as_u16();

        if status == 401 {
            self.notify_unauthorized();
            return Err(ApiError::Unauthorized);
        }

        if !(200..300).contains(&status) {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or_else(|_| {
                    if text.is_empty() {
                        "Unknown error".to_string()
                    } else {
                        text
                    }
                });
            return Err(ApiError::Server { status, message });
        }

        let text = response.text().await.map_err(ApiError::from_reqwest)?;
        serde_json::from_str::<T>(&text).map_err(|e| {
            ApiError::Http(format!(
                "Invalid response format: {}. Response: {}",
                e,
                &text[..text.len().min(200)]
            ))
        })
    }

    fn notify_unauthorized(&self) {
        let hook = self
            .on_unauthorized
            .read()
            .ok()
            .and_then(|slot| slot.clone());
        if let Some(hook) = hook {
            hook();
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field(
                "has_unauthorized_hook",
                &self
                    .on_unauthorized
                    .read()
                    .map(|slot| slot.is_some())
                    .unwrap_or(false),
            )
            .finish()
    }
}
