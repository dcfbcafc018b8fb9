//! Chat session and message flow.
//!
//! Owns the session list, the active session's transcript, and the
//! optimistic-send lifecycle: the user's message is appended locally with a
//! provisional negative id and a pending flag before the round-trip, then
//! confirmed in place on success or removed on failure. Message fetches
//! carry sequence tags so a stale fetch from a rapid session switch cannot
//! clobber the transcript of the newer selection.

use crate::api::{ChatRequest, ChatResponse};
use crate::models::{ChatMessage, ChatSession};

/// Title used when creating a session without an explicit name
pub const DEFAULT_SESSION_TITLE: &str = "New Chat Session";

/// Outcome of deleting a session, for the owner to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// A non-active session was removed; nothing else changes
    RemovedInactive,
    /// The active session was removed and the first remaining one took its
    /// place; its messages must be fetched with the given sequence tag
    Reselected { session_id: i64, seq: u64 },
    /// The active session was removed and none remain
    Cleared,
}

/// Context hints attached to the next sent message
#[derive(Debug, Clone, Default)]
pub struct PendingHints {
    pub context: Option<String>,
    pub file_ids: Vec<String>,
}

impl PendingHints {
    pub fn is_empty(&self) -> bool {
        self.context.is_none() && self.file_ids.is_empty()
    }
}

/// State container for the chat screen
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    /// Sidebar sessions, most recently active first after local reorders
    pub sessions: Vec<ChatSession>,
    /// The session whose transcript is shown
    pub current_session_id: Option<i64>,
    /// Transcript of the current session, oldest first
    pub messages: Vec<ChatMessage>,
    pub loading_sessions: bool,
    pub loading_messages: bool,
    /// True while a send round-trip is in flight
    pub sending: bool,
    pub error: Option<String>,
    /// Sidebar cursor (which session the keyboard highlights)
    pub sidebar_index: usize,
    /// File/context hints for the next send, attached from the file viewer
    pub hints: PendingHints,
    /// True once the first session load has been issued
    pub loaded: bool,
    /// Next provisional id for optimistic inserts; always negative
    next_local_id: i64,
    /// Latest issued message-fetch sequence number
    msg_seq: u64,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Sessions
    // ------------------------------------------------------------------

    /// Enter the loading state for the session list fetch
    pub fn begin_load_sessions(&mut self) {
        self.loading_sessions = true;
        self.error = None;
        self.loaded = true;
    }

    /// Apply the fetched session list.
    ///
    /// If no session is selected and at least one exists, the first in list
    /// order becomes current; the returned sequence tag drives its message
    /// fetch.
    pub fn set_sessions(&mut self, sessions: Vec<ChatSession>) -> Option<(i64, u64)> {
        self.sessions = sessions;
        self.loading_sessions = false;
        self.error = None;
        self.clamp_sidebar();

        if self.current_session_id.is_none() {
            if let Some(first) = self.sessions.first() {
                let id = first.id;
                self.current_session_id = Some(id);
                return Some((id, self.begin_load_messages()));
            }
        }
        None
    }

    /// Apply a failed session list fetch
    pub fn sessions_error(&mut self, error: String) {
        self.loading_sessions = false;
        self.error = Some(error);
    }

    /// The currently selected session
    pub fn current_session(&self) -> Option<&ChatSession> {
        let id = self.current_session_id?;
        self.sessions.iter().find(|s| s.id == id)
    }

    /// The session under the sidebar cursor
    pub fn highlighted_session(&self) -> Option<&ChatSession> {
        self.sessions.get(self.sidebar_index)
    }

    /// Move the sidebar cursor up
    pub fn sidebar_up(&mut self) {
        if self.sidebar_index > 0 {
            self.sidebar_index -= 1;
        }
    }

    /// Move the sidebar cursor down
    pub fn sidebar_down(&mut self) {
        if self.sidebar_index + 1 < self.sessions.len() {
            self.sidebar_index += 1;
        }
    }

    fn clamp_sidebar(&mut self) {
        if self.sessions.is_empty() {
            self.sidebar_index = 0;
        } else if self.sidebar_index >= self.sessions.len() {
            self.sidebar_index = self.sessions.len() - 1;
        }
    }

    /// Switch to a session.
    ///
    /// Switching always re-fetches the full transcript (no cache of
    /// previously viewed sessions). Returns the fetch sequence tag, or None
    /// when the session is already current or unknown.
    pub fn select_session(&mut self, session_id: i64) -> Option<u64> {
        if self.current_session_id == Some(session_id) {
            return None;
        }
        if !self.sessions.iter().any(|s| s.id == session_id) {
            return None;
        }
        self.current_session_id = Some(session_id);
        self.messages.clear();
        Some(self.begin_load_messages())
    }

    // ------------------------------------------------------------------
    // Messages
    // ------------------------------------------------------------------

    /// Enter the loading state for a transcript fetch and return its tag
    pub fn begin_load_messages(&mut self) -> u64 {
        self.loading_messages = true;
        self.error = None;
        self.msg_seq += 1;
        self.msg_seq
    }

    /// Whether a transcript completion tagged `seq` is still the latest
    pub fn is_current_fetch(&self, seq: u64) -> bool {
        seq == self.msg_seq
    }

    /// Apply a fetched transcript. Returns false for stale responses.
    pub fn set_messages(&mut self, seq: u64, messages: Vec<ChatMessage>) -> bool {
        if !self.is_current_fetch(seq) {
            return false;
        }
        self.messages = messages;
        self.loading_messages = false;
        self.error = None;
        true
    }

    /// Apply a failed transcript fetch. Returns false for stale responses.
    pub fn messages_error(&mut self, seq: u64, error: String) -> bool {
        if !self.is_current_fetch(seq) {
            return false;
        }
        self.loading_messages = false;
        self.error = Some(error);
        true
    }

    // ------------------------------------------------------------------
    // Sending
    // ------------------------------------------------------------------

    /// Validate and stage a send.
    ///
    /// Whitespace-only input or no selected session aborts locally with no
    /// state change and no network call. Otherwise the trimmed content is
    /// appended as a pending user message and the request to issue is
    /// returned along with the provisional id to reconcile against.
    pub fn prepare_send(&mut self, input: &str) -> Option<(ChatRequest, i64)> {
        let content = input.trim();
        if content.is_empty() {
            return None;
        }
        let session_id = self.current_session_id?;

        self.next_local_id -= 1;
        let provisional_id = self.next_local_id;
        self.messages
            .push(ChatMessage::local_user(provisional_id, content.to_string()));
        self.sending = true;
        self.error = None;

        let mut request = ChatRequest::new(content.to_string(), session_id);
        if !self.hints.is_empty() {
            let hints = std::mem::take(&mut self.hints);
            request.context = hints.context;
            request.file_ids = (!hints.file_ids.is_empty()).then_some(hints.file_ids);
        }
        Some((request, provisional_id))
    }

    /// Apply a successful send: confirm the pending record, append the
    /// assistant's reply, and move the session to the front of the sidebar
    /// with refreshed activity, all without a server re-fetch.
    pub fn apply_send_success(&mut self, provisional_id: i64, response: ChatResponse) {
        self.sending = false;

        if let Some(message) = self.messages.iter_mut().find(|m| m.id == provisional_id) {
            message.confirm();
        }

        let timestamp = response.timestamp;
        self.messages.push(response.into_message());

        if let Some(session_id) = self.current_session_id {
            if let Some(pos) = self.sessions.iter().position(|s| s.id == session_id) {
                let mut session = self.sessions.remove(pos);
                session.touch(timestamp);
                session.bump_message_count(2);
                self.sessions.insert(0, session);
                self.sidebar_index = 0;
            }
        }
    }

    /// Apply a failed send: roll the pending record back and surface the error
    pub fn apply_send_failure(&mut self, provisional_id: i64, error: String) {
        self.sending = false;
        self.messages.retain(|m| m.id != provisional_id);
        self.error = Some(error);
    }

    /// Attach a drive file as a context hint for the next send
    pub fn attach_file(&mut self, file_id: String, context: Option<String>) {
        if !self.hints.file_ids.contains(&file_id) {
            self.hints.file_ids.push(file_id);
        }
        if context.is_some() {
            self.hints.context = context;
        }
    }

    // ------------------------------------------------------------------
    // Create / delete
    // ------------------------------------------------------------------

    /// Apply a created session: prepend, select it, clear the transcript
    pub fn insert_created(&mut self, session: ChatSession) {
        self.current_session_id = Some(session.id);
        self.sessions.insert(0, session);
        self.sidebar_index = 0;
        self.messages.clear();
        self.loading_messages = false;
        self.error = None;
    }

    /// Apply a deleted session.
    ///
    /// If it was the active one, the first remaining session is selected
    /// (in list order) and its transcript fetch is staged; with none left
    /// the selection and transcript clear.
    pub fn remove_session(&mut self, session_id: i64) -> DeleteOutcome {
        self.sessions.retain(|s| s.id != session_id);
        self.clamp_sidebar();

        if self.current_session_id != Some(session_id) {
            return DeleteOutcome::RemovedInactive;
        }

        self.messages.clear();
        match self.sessions.first() {
            Some(first) => {
                let id = first.id;
                self.current_session_id = Some(id);
                DeleteOutcome::Reselected {
                    session_id: id,
                    seq: self.begin_load_messages(),
                }
            }
            None => {
                self.current_session_id = None;
                self.loading_messages = false;
                DeleteOutcome::Cleared
            }
        }
    }
}
