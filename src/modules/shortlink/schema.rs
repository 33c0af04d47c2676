use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Cached short link, a local mirror of what the server accepted.
#[allow(unused)]
#[derive(Debug, Clone, FromRow)]
pub struct ShortLinkEntity {
    pub id: i64,
    pub domain: String,
    pub slug: String,
    pub short_url: String,
    pub target_url: String,
    pub title: Option<String>,
    pub custom_slug: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DomainsResponse {
    pub domains: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateShortLinkRequest {
    #[validate(url(message = "target URL must be a valid URL"))]
    pub target_url: String,
    #[validate(length(min = 1, message = "domain must not be empty"))]
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "expiration redirect URL must be a valid URL"))]
    pub expiration_redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateShortLinkResponse {
    pub short_url: String,
    pub slug: String,
    #[serde(default)]
    pub custom_slug: Option<String>,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateShortLinkRequest {
    #[validate(length(min = 1, message = "domain must not be empty"))]
    pub domain: String,
    #[validate(length(min = 1, message = "slug must not be empty"))]
    pub slug: String,
    #[validate(url(message = "target URL must be a valid URL"))]
    pub target_url: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteShortLinkRequest {
    pub domain: String,
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisitStatResponse {
    pub visit_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_invalid_target() {
        let request = CreateShortLinkRequest {
            target_url: "not a url".to_string(),
            domain: "s.ee".to_string(),
            custom_slug: None,
            title: None,
            password: None,
            expire_at: None,
            expiration_redirect_url: None,
            tag_ids: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn optional_fields_are_omitted_from_the_wire_format() {
        let request = CreateShortLinkRequest {
            target_url: "https://example.com/long".to_string(),
            domain: "s.ee".to_string(),
            custom_slug: None,
            title: None,
            password: None,
            expire_at: None,
            expiration_redirect_url: None,
            tag_ids: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"target_url":"https://example.com/long","domain":"s.ee"}"#);
    }
}
