use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Cached text share. `content` keeps the full pasted text so shares remain
/// readable offline.
#[allow(unused)]
#[derive(Debug, Clone, FromRow)]
pub struct TextShareEntity {
    pub id: i64,
    pub domain: String,
    pub slug: String,
    pub short_url: String,
    pub title: String,
    pub content: String,
    pub text_type: String,
    pub custom_slug: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateTextShareRequest {
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTextShareResponse {
    pub short_url: String,
    pub slug: String,
    #[serde(default)]
    pub custom_slug: Option<String>,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateTextShareRequest {
    #[validate(length(min = 1, message = "domain must not be empty"))]
    pub domain: String,
    #[validate(length(min = 1, message = "slug must not be empty"))]
    pub slug: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteTextShareRequest {
    pub domain: String,
    pub slug: String,
}
