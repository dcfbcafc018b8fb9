//! AppMessage enum for async communication within the application.
//!
//! Spawned API tasks never touch state directly; they post one of these
//! through the app's channel and the event loop applies it between frames.
//! Fetch variants carry the sequence tag issued when the request was
//! staged, so stale completions can be recognized and discarded.

use crate::api::{AuthStatusResponse, ChatResponse};
use crate::models::{ChatMessage, ChatSession, DriveFile};

/// Messages received from async API operations
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Auth status check finished (Ok = server answered, Err = transport failure)
    AuthChecked(Result<AuthStatusResponse, String>),
    /// Logout round-trip finished; error is kept when the call failed
    LoggedOut { error: Option<String> },
    /// Some call got a 401; the session is gone
    SessionExpired,

    /// Both dashboard fetches resolved
    DashboardLoaded {
        files: Vec<DriveFile>,
        sessions: Vec<ChatSession>,
    },
    /// Either dashboard fetch failed; one combined error
    DashboardError { error: String },

    /// File list fetch resolved
    FilesLoaded { seq: u64, files: Vec<DriveFile> },
    /// File list fetch failed
    FilesError { seq: u64, error: String },
    /// File content fetch resolved for the viewer
    FileContentLoaded { file_id: String, content: String },
    /// File content fetch failed
    FileContentError { file_id: String, error: String },

    /// Session list fetch resolved
    SessionsLoaded { sessions: Vec<ChatSession> },
    /// Session list fetch failed
    SessionsError { error: String },
    /// Transcript fetch resolved
    MessagesLoaded {
        seq: u64,
        messages: Vec<ChatMessage>,
    },
    /// Transcript fetch failed
    MessagesError { seq: u64, error: String },
    /// Send round-trip resolved with the assistant's reply
    MessageSent {
        provisional_id: i64,
        response: ChatResponse,
    },
    /// Send round-trip failed; the pending record rolls back
    MessageSendFailed { provisional_id: i64, error: String },
    /// Session creation resolved
    SessionCreated { session: ChatSession },
    /// Session creation failed
    SessionCreateFailed { error: String },
    /// Session deletion resolved
    SessionDeleted { session_id: i64 },
    /// Session deletion failed
    SessionDeleteFailed { error: String },
}
