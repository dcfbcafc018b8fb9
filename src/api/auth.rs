//! Auth endpoints: current user, status check, logout.

use serde::{Deserialize, Serialize};

use crate::models::User;

use super::{ApiClient, ApiError};

/// Response from the auth endpoints (GET /auth/user, GET /auth/status)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatusResponse {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Plain acknowledgement body ({"message": ...})
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl ApiClient {
    /// Fetch the current authenticated user.
    ///
    /// GET /auth/user
    pub async fn current_user(&self) -> Result<AuthStatusResponse, ApiError> {
        self.get_json("/auth/user").await
    }

    /// Lightweight auth status check.
    ///
    /// GET /auth/status
    pub async fn auth_status(&self) -> Result<AuthStatusResponse, ApiError> {
        self.get_json("/auth/status").await
    }

    /// Invalidate the server-side session.
    ///
    /// POST /auth/logout
    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        self.post_empty("/auth/logout").await
    }
}
