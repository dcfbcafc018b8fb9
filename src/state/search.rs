//! Debounced search input state.
//!
//! The search box delays firing the search until the user pauses typing.
//! Each edit restarts the settle window; the owner polls [`SearchInput::should_fire`]
//! on its tick and calls [`SearchInput::fired`] once it has issued the search.

use std::time::{Duration, Instant};

/// Settle window after the last keystroke before the search fires
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// State of the debounced search box
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    /// Current text in the box
    pub query: String,
    /// Last time the query changed; None when no search is pending
    last_edit: Option<Instant>,
}

impl SearchInput {
    /// Create an empty search input
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character, restarting the settle window
    pub fn push(&mut self, c: char) {
        self.query.push(c);
        self.last_edit = Some(Instant::now());
    }

    /// Remove the last character, restarting the settle window
    pub fn backspace(&mut self) {
        if self.query.pop().is_some() {
            self.last_edit = Some(Instant::now());
        }
    }

    /// Replace the whole query, restarting the settle window
    pub fn set(&mut self, query: String) {
        self.query = query;
        self.last_edit = Some(Instant::now());
    }

    /// Clear the box immediately (Escape), dropping any pending fire.
    ///
    /// Returns true when there was text to clear, in which case the owner
    /// issues the empty search right away instead of waiting out the window.
    pub fn clear(&mut self) -> bool {
        let had_text = !self.query.is_empty();
        self.query.clear();
        self.last_edit = None;
        had_text
    }

    /// Whether a search is pending (an edit happened and has not fired yet)
    pub fn pending(&self) -> bool {
        self.last_edit.is_some()
    }

    /// Whether the settle window has elapsed since the last edit
    pub fn should_fire(&self) -> bool {
        self.should_fire_at(Instant::now())
    }

    fn should_fire_at(&self, now: Instant) -> bool {
        match self.last_edit {
            Some(last) => now.duration_since(last) >= Duration::from_millis(SEARCH_DEBOUNCE_MS),
            None => false,
        }
    }

    /// Mark the pending search as issued
    pub fn fired(&mut self) {
        self.last_edit = None;
    }
}
