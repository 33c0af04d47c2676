use serde::Deserialize;
use sqlx::prelude::FromRow;

use crate::format::FileLink;

/// Cached upload record mirroring the server's response.
#[allow(unused)]
#[derive(Debug, Clone, FromRow)]
pub struct UploadedFileEntity {
    pub id: i64,
    pub file_id: i64,
    pub filename: String,
    pub size: i64,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub url: String,
    pub page: Option<String>,
    pub hash: String,
    pub delete_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl UploadedFileEntity {
    /// View for the rendering engine; the share page falls back to the
    /// direct URL when the server returned none.
    pub fn as_link(&self) -> FileLink<'_> {
        FileLink {
            filename: &self.filename,
            direct_url: &self.url,
            page_url: self.page.as_deref(),
        }
    }
}

#[allow(unused)]
#[derive(Debug, Clone, Deserialize)]
pub struct UploadFileResponse {
    pub file_id: i64,
    pub filename: String,
    #[serde(default)]
    pub storename: Option<String>,
    pub size: i64,
    #[serde(default)]
    pub width: Option<i64>,
    #[serde(default)]
    pub height: Option<i64>,
    pub url: String,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    pub hash: String,
    #[serde(default)]
    pub delete: Option<String>,
    #[serde(default)]
    pub upload_status: Option<i64>,
}

/// `file/delete/{hash}` answers outside the usual envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteFileResponse {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LinkDisplayType;

    #[test]
    fn upload_response_parses_the_server_shape() {
        let json = r#"{
            "file_id": 42,
            "filename": "a.png",
            "size": 1234,
            "url": "https://cdn.s.ee/a.png",
            "page": "https://s.ee/p/a",
            "hash": "deadbeef"
        }"#;
        let response: UploadFileResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.file_id, 42);
        assert_eq!(response.width, None);
        assert_eq!(response.delete, None);
    }

    #[test]
    fn entity_link_falls_back_to_the_direct_url() {
        let entity = UploadedFileEntity {
            id: 1,
            file_id: 42,
            filename: "a.png".to_string(),
            size: 1234,
            width: None,
            height: None,
            url: "https://cdn.s.ee/a.png".to_string(),
            page: None,
            hash: "deadbeef".to_string(),
            delete_url: None,
            created_at: chrono::Utc::now(),
        };
        assert_eq!(LinkDisplayType::SharePage.render(&entity.as_link()), "https://cdn.s.ee/a.png");
    }
}
