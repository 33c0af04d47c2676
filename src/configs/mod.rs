use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

use crate::{api::error, ENV};

pub const KEY_DEFAULT_LINK_DOMAIN: &str = "default_link_domain";
pub const KEY_DEFAULT_TEXT_DOMAIN: &str = "default_text_domain";
pub const KEY_DEFAULT_FILE_DOMAIN: &str = "default_file_domain";
pub const KEY_FILE_LINK_DISPLAY_TYPE: &str = "file_link_display_type";

/// The cache mirrors server state: rows are written after successful API
/// calls and replaced on their natural key when the server returns the same
/// resource again.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS short_links (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    domain TEXT NOT NULL,
    slug TEXT NOT NULL,
    short_url TEXT NOT NULL,
    target_url TEXT NOT NULL,
    title TEXT,
    custom_slug TEXT,
    created_at TEXT NOT NULL,
    UNIQUE (domain, slug) ON CONFLICT REPLACE
);

CREATE TABLE IF NOT EXISTS text_shares (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    domain TEXT NOT NULL,
    slug TEXT NOT NULL,
    short_url TEXT NOT NULL,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    text_type TEXT NOT NULL DEFAULT 'plain_text',
    custom_slug TEXT,
    created_at TEXT NOT NULL,
    UNIQUE (domain, slug) ON CONFLICT REPLACE
);

CREATE TABLE IF NOT EXISTS uploaded_files (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    file_id INTEGER NOT NULL,
    filename TEXT NOT NULL,
    size INTEGER NOT NULL,
    width INTEGER,
    height INTEGER,
    url TEXT NOT NULL,
    page TEXT,
    hash TEXT NOT NULL,
    delete_url TEXT,
    created_at TEXT NOT NULL,
    UNIQUE (hash) ON CONFLICT REPLACE
);

CREATE TABLE IF NOT EXISTS preferences (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

pub async fn connect_database() -> Result<SqlitePool, error::SystemError> {
    let database_path = &ENV.database_path;
    if let Some(parent) = Path::new(database_path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let options = SqliteConnectOptions::new().filename(database_path).create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_slow_threshold(std::time::Duration::from_secs(3))
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), error::SystemError> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Key-value store for client preferences, persisted next to the cache.
#[derive(Clone)]
pub struct PreferenceStore {
    pool: SqlitePool,
}

impl PreferenceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get<T>(&self, key: &str) -> Result<Option<T>, error::SystemError>
    where
        T: serde::de::DeserializeOwned,
    {
        let value: Option<(String,)> =
            sqlx::query_as("SELECT value FROM preferences WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        match value {
            Some((v,)) => {
                let parsed = serde_json::from_str(&v)?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), error::SystemError>
    where
        T: serde::Serialize,
    {
        let serialized = serde_json::to_string(value)?;

        sqlx::query(
            r#"
            INSERT INTO preferences (key, value) VALUES (?, ?)
            ON CONFLICT (key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(serialized)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, key: &str) -> Result<(), error::SystemError> {
        sqlx::query("DELETE FROM preferences WHERE key = ?").bind(key).execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    init_schema(&pool).await.expect("schema");
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn preference_round_trip() {
        let store = PreferenceStore::new(test_pool().await);

        assert!(store.get::<String>(KEY_DEFAULT_LINK_DOMAIN).await.unwrap().is_none());

        store.set(KEY_DEFAULT_LINK_DOMAIN, &"s.ee".to_string()).await.unwrap();
        assert_eq!(
            store.get::<String>(KEY_DEFAULT_LINK_DOMAIN).await.unwrap().as_deref(),
            Some("s.ee")
        );

        // overwrite keeps a single row per key
        store.set(KEY_DEFAULT_LINK_DOMAIN, &"example.com".to_string()).await.unwrap();
        assert_eq!(
            store.get::<String>(KEY_DEFAULT_LINK_DOMAIN).await.unwrap().as_deref(),
            Some("example.com")
        );

        store.delete(KEY_DEFAULT_LINK_DOMAIN).await.unwrap();
        assert!(store.get::<String>(KEY_DEFAULT_LINK_DOMAIN).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let pool = test_pool().await;
        init_schema(&pool).await.unwrap();
    }
}
