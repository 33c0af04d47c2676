use crate::modules::file::schema::UploadFileResponse;

pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// New cache row, taken from a successful upload response.
#[derive(Debug, Clone)]
pub struct NewUploadedFile {
    pub file_id: i64,
    pub filename: String,
    pub size: i64,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub url: String,
    pub page: Option<String>,
    pub hash: String,
    pub delete_url: Option<String>,
}

impl From<&UploadFileResponse> for NewUploadedFile {
    fn from(response: &UploadFileResponse) -> Self {
        Self {
            file_id: response.file_id,
            filename: response.filename.clone(),
            size: response.size,
            width: response.width,
            height: response.height,
            url: response.url.clone(),
            page: response.page.clone(),
            hash: response.hash.clone(),
            delete_url: response.delete.clone(),
        }
    }
}
