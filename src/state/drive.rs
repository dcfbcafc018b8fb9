//! File browser and viewer state.
//!
//! Owns the fetched file list, the remembered search term, the selection,
//! and the detail pane. List fetches carry a monotonically increasing
//! sequence number; a response tagged below the latest issued sequence is
//! stale (a newer request superseded it) and is discarded instead of
//! clobbering fresh data.

use crate::models::DriveFile;

use super::search::SearchInput;

/// Fixed page size for file listings; larger result sets are truncated by
/// the backend and no pagination cursor is exposed.
pub const PAGE_SIZE: u32 = 50;

/// Build the drive query expression for a search term, matching on file
/// name or full text.
pub fn search_expression(term: &str) -> String {
    format!("name contains '{}' or fullText contains '{}'", term, term)
}

/// Detail pane for a selected file
#[derive(Debug, Clone)]
pub struct FileViewerState {
    pub file: DriveFile,
    /// Extracted text content; folders never fetch content
    pub content: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    /// Vertical scroll offset within the content
    pub scroll: u16,
}

impl FileViewerState {
    fn new(file: DriveFile) -> Self {
        let loading = !file.is_folder;
        Self {
            file,
            content: None,
            loading,
            error: None,
            scroll: 0,
        }
    }
}

/// State container for the file browser screen
#[derive(Debug, Clone, Default)]
pub struct DriveState {
    pub files: Vec<DriveFile>,
    pub loading: bool,
    pub error: Option<String>,
    /// Debounced search box
    pub search: SearchInput,
    /// Raw search term behind the currently displayed list (for refresh)
    pub last_term: Option<String>,
    /// Cursor position in the file list
    pub selected_index: usize,
    /// Detail pane, when a file is open
    pub viewer: Option<FileViewerState>,
    /// True once the first load has been issued
    pub loaded: bool,
    /// Latest issued list-fetch sequence number
    seq: u64,
}

impl DriveState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading state for a list fetch and return its sequence tag.
    pub fn begin_load(&mut self, term: Option<String>) -> u64 {
        self.loading = true;
        self.error = None;
        self.last_term = term;
        self.loaded = true;
        self.seq += 1;
        self.seq
    }

    /// Whether a completion tagged `seq` is still the latest request.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.seq
    }

    /// Apply a completed list fetch. Returns false for stale responses.
    pub fn set_files(&mut self, seq: u64, files: Vec<DriveFile>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.files = files;
        self.loading = false;
        self.error = None;
        self.clamp_selection();
        true
    }

    /// Apply a failed list fetch. Returns false for stale responses.
    pub fn set_error(&mut self, seq: u64, error: String) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.loading = false;
        self.error = Some(error);
        true
    }

    /// The file under the cursor
    pub fn selected_file(&self) -> Option<&DriveFile> {
        self.files.get(self.selected_index)
    }

    /// Move the cursor up
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move the cursor down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.files.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.files.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.files.len() {
            self.selected_index = self.files.len() - 1;
        }
    }

    /// Open the detail pane for the file under the cursor.
    ///
    /// Returns the file id when a content fetch is needed (non-folders only).
    pub fn open_selected(&mut self) -> Option<String> {
        let file = self.selected_file()?.clone();
        let wants_content = !file.is_folder;
        let id = file.id.clone();
        self.viewer = Some(FileViewerState::new(file));
        wants_content.then_some(id)
    }

    /// Close the detail pane and return to the list (no re-fetch)
    pub fn close_viewer(&mut self) {
        self.viewer = None;
    }

    /// Apply fetched content to the viewer, if it still shows that file
    pub fn set_viewer_content(&mut self, file_id: &str, content: String) {
        if let Some(viewer) = self.viewer.as_mut() {
            if viewer.file.id == file_id {
                viewer.content = Some(content);
                viewer.loading = false;
                viewer.error = None;
            }
        }
    }

    /// Apply a failed content fetch to the viewer, if it still shows that file
    pub fn set_viewer_error(&mut self, file_id: &str, error: String) {
        if let Some(viewer) = self.viewer.as_mut() {
            if viewer.file.id == file_id {
                viewer.loading = false;
                viewer.error = Some(error);
            }
        }
    }

    /// Nothing listed and nothing in flight
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && !self.loading
    }
}
