use sqlx::SqlitePool;

use crate::{
    api::error,
    modules::textshare::{
        model::NewTextShare, repository::TextShareRepository, schema::TextShareEntity,
    },
};

#[derive(Clone)]
pub struct TextShareSqliteRepository {
    pool: SqlitePool,
}

impl TextShareSqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl TextShareRepository for TextShareSqliteRepository {
    async fn insert(&self, share: &NewTextShare) -> Result<TextShareEntity, error::SystemError> {
        let entity = sqlx::query_as::<_, TextShareEntity>(
            r#"
            INSERT INTO text_shares (domain, slug, short_url, title, content, text_type, custom_slug, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&share.domain)
        .bind(&share.slug)
        .bind(&share.short_url)
        .bind(&share.title)
        .bind(&share.content)
        .bind(&share.text_type)
        .bind(&share.custom_slug)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn list(&self) -> Result<Vec<TextShareEntity>, error::SystemError> {
        let shares = sqlx::query_as::<_, TextShareEntity>(
            r#"
            SELECT * FROM text_shares ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(shares)
    }

    async fn search(&self, query: &str) -> Result<Vec<TextShareEntity>, error::SystemError> {
        let shares = sqlx::query_as::<_, TextShareEntity>(
            r#"
            SELECT * FROM text_shares
            WHERE domain LIKE '%' || ? || '%'
               OR slug LIKE '%' || ? || '%'
               OR title LIKE '%' || ? || '%'
               OR content LIKE '%' || ? || '%'
            ORDER BY created_at DESC
            "#,
        )
        .bind(query)
        .bind(query)
        .bind(query)
        .bind(query)
        .fetch_all(&self.pool)
        .await?;

        Ok(shares)
    }

    async fn update(
        &self,
        domain: &str,
        slug: &str,
        content: &str,
        title: &str,
    ) -> Result<(), error::SystemError> {
        sqlx::query(
            r#"
            UPDATE text_shares SET content = ?, title = ? WHERE domain = ? AND slug = ?
            "#,
        )
        .bind(content)
        .bind(title)
        .bind(domain)
        .bind(slug)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, domain: &str, slug: &str) -> Result<(), error::SystemError> {
        sqlx::query("DELETE FROM text_shares WHERE domain = ? AND slug = ?")
            .bind(domain)
            .bind(slug)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), error::SystemError> {
        sqlx::query("DELETE FROM text_shares").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::test_pool;
    use crate::modules::textshare::model::DEFAULT_TEXT_TYPE;

    fn new_share(slug: &str, content: &str) -> NewTextShare {
        NewTextShare {
            domain: "s.ee".to_string(),
            slug: slug.to_string(),
            short_url: format!("https://s.ee/{}", slug),
            title: "note".to_string(),
            content: content.to_string(),
            text_type: DEFAULT_TEXT_TYPE.to_string(),
            custom_slug: None,
        }
    }

    #[tokio::test]
    async fn insert_replaces_on_same_domain_and_slug() {
        let repo = TextShareSqliteRepository::new(test_pool().await);

        repo.insert(&new_share("abc", "first")).await.unwrap();
        repo.insert(&new_share("abc", "second")).await.unwrap();

        let shares = repo.list().await.unwrap();
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].content, "second");
        assert_eq!(shares[0].text_type, DEFAULT_TEXT_TYPE);
    }

    #[tokio::test]
    async fn search_includes_the_content() {
        let repo = TextShareSqliteRepository::new(test_pool().await);

        repo.insert(&new_share("abc", "a note about rust")).await.unwrap();
        repo.insert(&new_share("xyz", "groceries")).await.unwrap();

        let found = repo.search("rust").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].slug, "abc");
    }

    #[tokio::test]
    async fn update_and_clear() {
        let repo = TextShareSqliteRepository::new(test_pool().await);

        repo.insert(&new_share("abc", "draft")).await.unwrap();
        repo.update("s.ee", "abc", "final", "renamed").await.unwrap();

        let shares = repo.list().await.unwrap();
        assert_eq!(shares[0].content, "final");
        assert_eq!(shares[0].title, "renamed");

        repo.clear().await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }
}
