use sqlx::SqlitePool;

use crate::{
    api::error,
    modules::file::{
        model::NewUploadedFile, repository::UploadedFileRepository, schema::UploadedFileEntity,
    },
};

#[derive(Clone)]
pub struct UploadedFileSqliteRepository {
    pool: SqlitePool,
}

impl UploadedFileSqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UploadedFileRepository for UploadedFileSqliteRepository {
    async fn insert(
        &self,
        file: &NewUploadedFile,
    ) -> Result<UploadedFileEntity, error::SystemError> {
        let entity = sqlx::query_as::<_, UploadedFileEntity>(
            r#"
            INSERT INTO uploaded_files (file_id, filename, size, width, height, url, page, hash, delete_url, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(file.file_id)
        .bind(&file.filename)
        .bind(file.size)
        .bind(file.width)
        .bind(file.height)
        .bind(&file.url)
        .bind(&file.page)
        .bind(&file.hash)
        .bind(&file.delete_url)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn list(&self) -> Result<Vec<UploadedFileEntity>, error::SystemError> {
        let files = sqlx::query_as::<_, UploadedFileEntity>(
            r#"
            SELECT * FROM uploaded_files ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(files)
    }

    async fn search(&self, query: &str) -> Result<Vec<UploadedFileEntity>, error::SystemError> {
        let files = sqlx::query_as::<_, UploadedFileEntity>(
            r#"
            SELECT * FROM uploaded_files
            WHERE filename LIKE '%' || ? || '%'
               OR url LIKE '%' || ? || '%'
            ORDER BY created_at DESC
            "#,
        )
        .bind(query)
        .bind(query)
        .fetch_all(&self.pool)
        .await?;

        Ok(files)
    }

    async fn find_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<UploadedFileEntity>, error::SystemError> {
        let file = sqlx::query_as::<_, UploadedFileEntity>(
            r#"
            SELECT * FROM uploaded_files WHERE hash = ?
            "#,
        )
        .bind(hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(file)
    }

    async fn delete_by_hash(&self, hash: &str) -> Result<(), error::SystemError> {
        sqlx::query("DELETE FROM uploaded_files WHERE hash = ?")
            .bind(hash)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), error::SystemError> {
        sqlx::query("DELETE FROM uploaded_files").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::test_pool;

    fn new_file(hash: &str, filename: &str) -> NewUploadedFile {
        NewUploadedFile {
            file_id: 1,
            filename: filename.to_string(),
            size: 1234,
            width: None,
            height: None,
            url: format!("https://cdn.s.ee/{}", filename),
            page: Some(format!("https://s.ee/p/{}", hash)),
            hash: hash.to_string(),
            delete_url: None,
        }
    }

    #[tokio::test]
    async fn reuploading_the_same_hash_replaces_the_row() {
        let repo = UploadedFileSqliteRepository::new(test_pool().await);

        repo.insert(&new_file("deadbeef", "a.png")).await.unwrap();
        repo.insert(&new_file("deadbeef", "a-renamed.png")).await.unwrap();

        let files = repo.list().await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "a-renamed.png");
    }

    #[tokio::test]
    async fn find_and_delete_by_hash() {
        let repo = UploadedFileSqliteRepository::new(test_pool().await);

        repo.insert(&new_file("deadbeef", "a.png")).await.unwrap();
        assert!(repo.find_by_hash("deadbeef").await.unwrap().is_some());
        assert!(repo.find_by_hash("cafebabe").await.unwrap().is_none());

        repo.delete_by_hash("deadbeef").await.unwrap();
        assert!(repo.find_by_hash("deadbeef").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn search_matches_filename_or_url() {
        let repo = UploadedFileSqliteRepository::new(test_pool().await);

        repo.insert(&new_file("aaaa", "photo.png")).await.unwrap();
        repo.insert(&new_file("bbbb", "notes.txt")).await.unwrap();

        assert_eq!(repo.search("photo").await.unwrap().len(), 1);
        assert_eq!(repo.search("cdn.s.ee").await.unwrap().len(), 2);
    }
}
