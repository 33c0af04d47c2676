use std::path::Path;
use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::error;
use crate::modules::file::{
    model::{NewUploadedFile, FALLBACK_MIME_TYPE},
    repository::UploadedFileRepository,
    schema::{DeleteFileResponse, UploadFileResponse, UploadedFileEntity},
};
use crate::modules::shortlink::schema::DomainsResponse;

#[derive(Clone)]
pub struct FileService<R>
where
    R: UploadedFileRepository + Send + Sync,
{
    api: Arc<ApiClient>,
    repo: Arc<R>,
}

impl<R> FileService<R>
where
    R: UploadedFileRepository + Send + Sync,
{
    pub fn with_dependencies(api: Arc<ApiClient>, repo: Arc<R>) -> Self {
        Self { api, repo }
    }

    pub async fn domains(&self) -> Result<Vec<String>, error::SystemError> {
        let response = self.api.get::<DomainsResponse>("file/domains").await?;
        Ok(response.into_data()?.domains)
    }

    /// Reads the file, guesses its MIME type from the name, and uploads it
    /// as the `file` multipart field. The cache row is written only after
    /// the server accepted the upload.
    pub async fn upload(&self, path: &Path) -> Result<UploadFileResponse, error::SystemError> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("file")
            .to_string();
        let mime_type = mime_guess::from_path(path).first_raw().unwrap_or(FALLBACK_MIME_TYPE);
        let bytes = tokio::fs::read(path).await?;
        log::info!("uploading {} ({} bytes, {})", filename, bytes.len(), mime_type);

        let response = self
            .api
            .upload::<UploadFileResponse>("file/upload", "file", &filename, bytes, mime_type)
            .await?;
        let uploaded = response.into_data()?;

        self.repo.insert(&NewUploadedFile::from(&uploaded)).await?;

        Ok(uploaded)
    }

    /// Deletes on the server, then drops the cache row. The row is removed
    /// even when the remote call fails so a file deleted out-of-band does
    /// not stick around locally.
    pub async fn delete(&self, hash: &str) -> Result<(), error::SystemError> {
        match self.api.get_raw::<DeleteFileResponse>(&format!("file/delete/{}", hash)).await {
            Ok(response) if response.code == 200 || response.code == 0 => {}
            Ok(response) => {
                log::warn!(
                    "remote delete of {} failed with code {}: {}",
                    hash,
                    response.code,
                    response.message.as_deref().unwrap_or("no message")
                );
            }
            Err(err) => {
                log::warn!("remote delete of {} failed: {}", hash, err);
            }
        }

        self.repo.delete_by_hash(hash).await
    }

    pub async fn find_local(
        &self,
        hash: &str,
    ) -> Result<Option<UploadedFileEntity>, error::SystemError> {
        self.repo.find_by_hash(hash).await
    }

    pub async fn list_local(&self) -> Result<Vec<UploadedFileEntity>, error::SystemError> {
        self.repo.list().await
    }

    pub async fn search_local(
        &self,
        query: &str,
    ) -> Result<Vec<UploadedFileEntity>, error::SystemError> {
        self.repo.search(query).await
    }

    pub async fn clear_local(&self) -> Result<(), error::SystemError> {
        self.repo.clear().await
    }
}
