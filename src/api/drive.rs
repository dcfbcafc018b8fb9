//! Drive endpoints: file listing, metadata, content, search, folders.

use serde::{Deserialize, Serialize};

use crate::models::DriveFile;

use super::{ApiClient, ApiError};

/// Response from the file list and search endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileListResponse {
    pub files: Vec<DriveFile>,
    #[serde(default)]
    pub count: i64,
    /// The drive query the backend executed, echoed back
    #[serde(default)]
    pub query: String,
}

/// Response from the folder list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FolderListResponse {
    pub folders: Vec<DriveFile>,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Response from the file content endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileContentResponse {
    pub file_id: String,
    pub content: String,
}

impl ApiClient {
    /// List drive files, optionally filtered by a drive query expression.
    ///
    /// GET /drive/files?maxResults&query
    pub async fn list_files(
        &self,
        max_results: u32,
        query: Option<&str>,
    ) -> Result<FileListResponse, ApiError> {
        let mut path = format!("/drive/files?maxResults={}", max_results);
        if let Some(q) = query {
            path.push_str("&query=");
            path.push_str(&urlencoding::encode(q));
        }
        self.get_json(&path).await
    }

    /// Fetch metadata for a single file.
    ///
    /// GET /drive/files/{id}
    pub async fn get_file(&self, file_id: &str) -> Result<DriveFile, ApiError> {
        self.get_json(&format!("/drive/files/{}", file_id)).await
    }

    /// Fetch the extracted text content of a file.
    ///
    /// GET /drive/files/{id}/content
    ///
    /// The backend answers 404 for types it cannot extract; that surfaces
    /// as `ApiError::Server` like any other error status.
    pub async fn get_file_content(&self, file_id: &str) -> Result<FileContentResponse, ApiError> {
        self.get_json(&format!("/drive/files/{}/content", file_id))
            .await
    }

    /// Full-text search over drive files.
    ///
    /// GET /drive/search?q&maxResults
    pub async fn search_files(
        &self,
        q: &str,
        max_results: u32,
    ) -> Result<FileListResponse, ApiError> {
        let path = format!(
            "/drive/search?q={}&maxResults={}",
            urlencoding::encode(q),
            max_results
        );
        self.get_json(&path).await
    }

    /// List folders, optionally under a parent folder.
    ///
    /// GET /drive/folders?maxResults&parentId
    pub async fn list_folders(
        &self,
        parent_id: Option<&str>,
        max_results: u32,
    ) -> Result<FolderListResponse, ApiError> {
        let mut path = format!("/drive/folders?maxResults={}", max_results);
        if let Some(parent) = parent_id {
            path.push_str("&parentId=");
            path.push_str(&urlencoding::encode(parent));
        }
        self.get_json(&path).await
    }
}
