use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::error;
use crate::modules::shortlink::schema::DomainsResponse;
use crate::modules::textshare::{
    model::{NewTextShare, DEFAULT_TEXT_TYPE},
    repository::TextShareRepository,
    schema::{
        CreateTextShareRequest, CreateTextShareResponse, DeleteTextShareRequest, TextShareEntity,
        UpdateTextShareRequest,
    },
};
use crate::utils;

#[derive(Clone)]
pub struct TextShareService<R>
where
    R: TextShareRepository + Send + Sync,
{
    api: Arc<ApiClient>,
    repo: Arc<R>,
}

impl<R> TextShareService<R>
where
    R: TextShareRepository + Send + Sync,
{
    pub fn with_dependencies(api: Arc<ApiClient>, repo: Arc<R>) -> Self {
        Self { api, repo }
    }

    pub async fn domains(&self) -> Result<Vec<String>, error::SystemError> {
        let response = self.api.get::<DomainsResponse>("text/domains").await?;
        Ok(response.into_data()?.domains)
    }

    pub async fn create(
        &self,
        request: CreateTextShareRequest,
    ) -> Result<CreateTextShareResponse, error::SystemError> {
        utils::validate(&request)?;

        let response = self.api.post::<_, CreateTextShareResponse>("text", &request).await?;
        let created = response.into_data()?;

        // The server picks its default domain when none was sent; recover it
        // from the returned short URL so the cache row stays addressable.
        let domain = match &request.domain {
            Some(domain) => domain.clone(),
            None => domain_of(&created.short_url).unwrap_or_default(),
        };

        self.repo
            .insert(&NewTextShare {
                domain,
                slug: created.slug.clone(),
                short_url: created.short_url.clone(),
                title: request.title,
                content: request.content,
                text_type: request
                    .text_type
                    .unwrap_or_else(|| DEFAULT_TEXT_TYPE.to_string()),
                custom_slug: created.custom_slug.clone(),
            })
            .await?;

        Ok(created)
    }

    pub async fn update(&self, request: UpdateTextShareRequest) -> Result<(), error::SystemError> {
        utils::validate(&request)?;

        self.api.put::<_, serde_json::Value>("text", &request).await?.into_unit()?;

        self.repo
            .update(&request.domain, &request.slug, &request.content, &request.title)
            .await
    }

    pub async fn delete(&self, domain: &str, slug: &str) -> Result<(), error::SystemError> {
        let request =
            DeleteTextShareRequest { domain: domain.to_string(), slug: slug.to_string() };
        self.api.delete::<_, serde_json::Value>("text", &request).await?.into_unit()?;

        self.repo.delete(domain, slug).await
    }

    pub async fn list_local(&self) -> Result<Vec<TextShareEntity>, error::SystemError> {
        self.repo.list().await
    }

    pub async fn search_local(
        &self,
        query: &str,
    ) -> Result<Vec<TextShareEntity>, error::SystemError> {
        self.repo.search(query).await
    }

    pub async fn clear_local(&self) -> Result<(), error::SystemError> {
        self.repo.clear().await
    }
}

fn domain_of(url: &str) -> Option<String> {
    let rest = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://"))?;
    let host = rest.split('/').next()?;
    (!host.is_empty()).then(|| host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_is_recovered_from_a_short_url() {
        assert_eq!(domain_of("https://s.ee/abc").as_deref(), Some("s.ee"));
        assert_eq!(domain_of("http://txt.example.com/x/y").as_deref(), Some("txt.example.com"));
        assert_eq!(domain_of("not a url"), None);
    }
}
