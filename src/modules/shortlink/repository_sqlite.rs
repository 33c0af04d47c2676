use sqlx::SqlitePool;

use crate::{
    api::error,
    modules::shortlink::{
        model::NewShortLink, repository::ShortLinkRepository, schema::ShortLinkEntity,
    },
};

#[derive(Clone)]
pub struct ShortLinkSqliteRepository {
    pool: SqlitePool,
}

impl ShortLinkSqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ShortLinkRepository for ShortLinkSqliteRepository {
    async fn insert(&self, link: &NewShortLink) -> Result<ShortLinkEntity, error::SystemError> {
        let entity = sqlx::query_as::<_, ShortLinkEntity>(
            r#"
            INSERT INTO short_links (domain, slug, short_url, target_url, title, custom_slug, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&link.domain)
        .bind(&link.slug)
        .bind(&link.short_url)
        .bind(&link.target_url)
        .bind(&link.title)
        .bind(&link.custom_slug)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn list(&self) -> Result<Vec<ShortLinkEntity>, error::SystemError> {
        let links = sqlx::query_as::<_, ShortLinkEntity>(
            r#"
            SELECT * FROM short_links ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(links)
    }

    async fn search(&self, query: &str) -> Result<Vec<ShortLinkEntity>, error::SystemError> {
        let links = sqlx::query_as::<_, ShortLinkEntity>(
            r#"
            SELECT * FROM short_links
            WHERE domain LIKE '%' || ? || '%'
               OR slug LIKE '%' || ? || '%'
               OR target_url LIKE '%' || ? || '%'
               OR title LIKE '%' || ? || '%'
            ORDER BY created_at DESC
            "#,
        )
        .bind(query)
        .bind(query)
        .bind(query)
        .bind(query)
        .fetch_all(&self.pool)
        .await?;

        Ok(links)
    }

    async fn update(
        &self,
        domain: &str,
        slug: &str,
        target_url: &str,
        title: Option<&str>,
    ) -> Result<(), error::SystemError> {
        sqlx::query(
            r#"
            UPDATE short_links SET target_url = ?, title = ? WHERE domain = ? AND slug = ?
            "#,
        )
        .bind(target_url)
        .bind(title)
        .bind(domain)
        .bind(slug)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, domain: &str, slug: &str) -> Result<(), error::SystemError> {
        sqlx::query("DELETE FROM short_links WHERE domain = ? AND slug = ?")
            .bind(domain)
            .bind(slug)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), error::SystemError> {
        sqlx::query("DELETE FROM short_links").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::test_pool;

    fn new_link(domain: &str, slug: &str, target: &str) -> NewShortLink {
        NewShortLink {
            domain: domain.to_string(),
            slug: slug.to_string(),
            short_url: format!("https://{}/{}", domain, slug),
            target_url: target.to_string(),
            title: None,
            custom_slug: None,
        }
    }

    #[tokio::test]
    async fn insert_and_list_newest_first() {
        let repo = ShortLinkSqliteRepository::new(test_pool().await);

        repo.insert(&new_link("s.ee", "one", "https://example.com/1")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        repo.insert(&new_link("s.ee", "two", "https://example.com/2")).await.unwrap();

        let links = repo.list().await.unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].slug, "two");
        assert_eq!(links[1].slug, "one");
    }

    #[tokio::test]
    async fn reinserting_the_same_domain_and_slug_replaces_the_row() {
        let repo = ShortLinkSqliteRepository::new(test_pool().await);

        repo.insert(&new_link("s.ee", "abc", "https://example.com/old")).await.unwrap();
        repo.insert(&new_link("s.ee", "abc", "https://example.com/new")).await.unwrap();

        let links = repo.list().await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target_url, "https://example.com/new");
    }

    #[tokio::test]
    async fn search_matches_any_field() {
        let repo = ShortLinkSqliteRepository::new(test_pool().await);

        repo.insert(&new_link("s.ee", "abc", "https://example.com/page")).await.unwrap();
        repo.insert(&new_link("other.ee", "xyz", "https://elsewhere.net/")).await.unwrap();

        assert_eq!(repo.search("example.com").await.unwrap().len(), 1);
        assert_eq!(repo.search("xyz").await.unwrap().len(), 1);
        assert_eq!(repo.search(".ee").await.unwrap().len(), 2);
        assert!(repo.search("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_and_delete_address_rows_by_domain_and_slug() {
        let repo = ShortLinkSqliteRepository::new(test_pool().await);

        repo.insert(&new_link("s.ee", "abc", "https://example.com/old")).await.unwrap();
        repo.update("s.ee", "abc", "https://example.com/new", Some("renamed")).await.unwrap();

        let links = repo.list().await.unwrap();
        assert_eq!(links[0].target_url, "https://example.com/new");
        assert_eq!(links[0].title.as_deref(), Some("renamed"));

        repo.delete("s.ee", "abc").await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clear_empties_the_table() {
        let repo = ShortLinkSqliteRepository::new(test_pool().await);

        repo.insert(&new_link("s.ee", "abc", "https://example.com/")).await.unwrap();
        repo.clear().await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }
}
