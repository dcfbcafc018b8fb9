//! Dashboard state: recent files and recent chat sessions.
//!
//! Both lists load concurrently at screen entry and are applied together;
//! a failure in either fetch reports one combined error and renders no
//! partial data.

use crate::models::{ChatSession, DriveFile};

/// How many recent files the dashboard shows
pub const RECENT_FILES: u32 = 5;

/// How many recent sessions the dashboard shows
pub const RECENT_SESSIONS: usize = 3;

/// State container for the dashboard screen
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub recent_files: Vec<DriveFile>,
    pub recent_sessions: Vec<ChatSession>,
    pub loading: bool,
    pub error: Option<String>,
    /// True once the first load has been issued (fetch-on-first-entry)
    pub loaded: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading state for a (re-)load
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
        self.loaded = true;
    }

    /// Apply the joined result of both fetches
    pub fn set_data(&mut self, files: Vec<DriveFile>, mut sessions: Vec<ChatSession>) {
        sessions.truncate(RECENT_SESSIONS);
        self.recent_files = files;
        self.recent_sessions = sessions;
        self.loading = false;
        self.error = None;
    }

    /// Apply the combined failure of either fetch
    pub fn set_error(&mut self, error: String) {
        self.loading = false;
        self.error = Some(error);
        self.recent_files.clear();
        self.recent_sessions.clear();
    }

    /// Nothing to show and nothing in flight
    pub fn is_empty(&self) -> bool {
        self.recent_files.is_empty() && self.recent_sessions.is_empty() && !self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: i64) -> ChatSession {
        serde_json::from_str(&format!(r#"{{"id": {}, "title": "S{}"}}"#, id, id))
            .expect("Failed to deserialize")
    }

    fn file(id: &str) -> DriveFile {
        serde_json::from_str(&format!(r#"{{"id": "{}", "name": "{}.txt"}}"#, id, id))
            .expect("Failed to deserialize")
    }

    #[test]
    fn test_new_state() {
        let state = DashboardState::new();
        assert!(!state.loading);
        assert!(!state.loaded);
        assert!(state.is_empty());
    }

    #[test]
    fn test_begin_load_marks_loaded() {
        let mut state = DashboardState::new();
        state.begin_load();
        assert!(state.loading);
        assert!(state.loaded);
        assert!(!state.is_empty()); // loading counts as not-empty
    }

    #[test]
    fn test_set_data_truncates_sessions() {
        let mut state = DashboardState::new();
        state.begin_load();
        state.set_data(
            vec![file("a")],
            vec![session(1), session(2), session(3), session(4), session(5)],
        );

        assert_eq!(state.recent_files.len(), 1);
        assert_eq!(state.recent_sessions.len(), RECENT_SESSIONS);
        assert!(!state.loading);
    }

    #[test]
    fn test_set_error_clears_partial_data() {
        let mut state = DashboardState::new();
        state.set_data(vec![file("a")], vec![session(1)]);

        state.begin_load();
        state.set_error("network down".to_string());

        // No partial-success rendering: a failed joined load shows nothing
        assert!(state.recent_files.is_empty());
        assert!(state.recent_sessions.is_empty());
        assert_eq!(state.error.as_deref(), Some("network down"));
    }
}
