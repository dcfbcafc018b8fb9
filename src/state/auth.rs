//! Authentication state machine.
//!
//! Tracks one tab-scoped auth lifecycle: `loading` (initial) →
//! `authenticated` | `unauthenticated` | `error`. The status check is
//! re-entrant; it runs once at startup and again on demand (login screen
//! re-check, session-expiry signal).

use crate::api::AuthStatusResponse;
use crate::models::User;

/// Authentication state, mirroring the backend's view of the session
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    /// The authenticated user, when present
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// True only while a status check is in flight
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Initial state: a check is about to run
    pub fn new() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
            error: None,
        }
    }

    /// Enter the loading state for a (re-)check
    pub fn begin_check(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Apply the result of a successful status-check call
    pub fn apply_status(&mut self, response: AuthStatusResponse) {
        if response.authenticated && response.user.is_some() {
            self.user = response.user;
            self.is_authenticated = true;
            self.is_loading = false;
            self.error = None;
        } else {
            self.user = None;
            self.is_authenticated = false;
            self.is_loading = false;
            self.error = Some(
                response
                    .error
                    .unwrap_or_else(|| "Not authenticated".to_string()),
            );
        }
    }

    /// Apply a transport-level failure of the status check
    pub fn apply_check_error(&mut self, message: String) {
        self.user = None;
        self.is_authenticated = false;
        self.is_loading = false;
        self.error = Some(message);
    }

    /// Apply a completed logout.
    ///
    /// Local state is cleared even when the server call failed; staying
    /// visually signed in against a dead session helps nobody. The error
    /// string, if any, is kept for the login screen.
    pub fn apply_logout(&mut self, error: Option<String>) {
        self.user = None;
        self.is_authenticated = false;
        self.is_loading = false;
        self.error = error;
    }

    /// Drop straight to unauthenticated (session-expiry signal from a 401)
    pub fn session_expired(&mut self) {
        self.user = None;
        self.is_authenticated = false;
        self.is_loading = false;
        self.error = Some("Session expired".to_string());
    }
}
