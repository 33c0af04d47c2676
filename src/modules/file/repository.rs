use crate::{
    api::error,
    modules::file::{model::NewUploadedFile, schema::UploadedFileEntity},
};

#[async_trait::async_trait]
pub trait UploadedFileRepository {
    async fn insert(
        &self,
        file: &NewUploadedFile,
    ) -> Result<UploadedFileEntity, error::SystemError>;

    async fn list(&self) -> Result<Vec<UploadedFileEntity>, error::SystemError>;

    async fn search(&self, query: &str) -> Result<Vec<UploadedFileEntity>, error::SystemError>;

    async fn find_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<UploadedFileEntity>, error::SystemError>;

    async fn delete_by_hash(&self, hash: &str) -> Result<(), error::SystemError>;

    async fn clear(&self) -> Result<(), error::SystemError>;
}
