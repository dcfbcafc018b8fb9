//! Drive file model.
//!
//! Read-only projection of a remote drive entry from the /drive endpoints.
//! Never mutated locally, only replaced by a re-fetch.

use serde::{Deserialize, Serialize};

/// A file or folder entry from the user's cloud drive
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// Drive file id (opaque string)
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
    /// File size in bytes (absent for folders and native docs)
    #[serde(default)]
    pub size: Option<u64>,
    /// Last modified timestamp as an ISO 8601 string
    #[serde(default)]
    pub modified_time: Option<String>,
    /// AI-generated summary of the file content, when available
    #[serde(default)]
    pub content_summary: Option<String>,
    /// Link for opening the file in the drive web UI
    #[serde(default)]
    pub web_view_link: Option<String>,
    #[serde(default)]
    pub download_link: Option<String>,
    #[serde(default)]
    pub is_folder: bool,
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl DriveFile {
    /// Short human-readable kind, derived from the mime type
    pub fn kind(&self) -> &str {
        if self.is_folder {
            return "Folder";
        }
        match self.mime_type.as_str() {
            "application/vnd.google-apps.document" => "Google Doc",
            "application/vnd.google-apps.spreadsheet" => "Google Sheet",
            "application/pdf" => "PDF",
            "text/plain" => "Text File",
            other => other.split('/').nth(1).filter(|s| !s.is_empty()).unwrap_or("File"),
        }
    }

    /// Format file size for display (e.g., "1.2 KB", "3.4 MB")
    pub fn format_size(&self) -> Option<String> {
        self.size.map(|bytes| {
            if bytes < 1024 {
                format!("{} B", bytes)
            } else if bytes < 1024 * 1024 {
                format!("{:.1} KB", bytes as f64 / 1024.0)
            } else if bytes < 1024 * 1024 * 1024 {
                format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
            } else {
                format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
            }
        })
    }

    /// Date portion of the modified timestamp, for list rows
    pub fn modified_date(&self) -> &str {
        self.modified_time
            .as_deref()
            .map(|t| t.split('T').next().unwrap_or(t))
            .unwrap_or("")
    }
}
