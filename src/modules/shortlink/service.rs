use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::error;
use crate::modules::shortlink::{
    model::NewShortLink,
    repository::ShortLinkRepository,
    schema::{
        CreateShortLinkRequest, CreateShortLinkResponse, DeleteShortLinkRequest, DomainsResponse,
        ShortLinkEntity, UpdateShortLinkRequest, VisitStatResponse,
    },
};
use crate::utils;

/// Short link operations: every remote mutation that succeeds is mirrored
/// into the local cache before the result is returned.
#[derive(Clone)]
pub struct ShortLinkService<R>
where
    R: ShortLinkRepository + Send + Sync,
{
    api: Arc<ApiClient>,
    repo: Arc<R>,
}

impl<R> ShortLinkService<R>
where
    R: ShortLinkRepository + Send + Sync,
{
    pub fn with_dependencies(api: Arc<ApiClient>, repo: Arc<R>) -> Self {
        Self { api, repo }
    }

    pub async fn domains(&self) -> Result<Vec<String>, error::SystemError> {
        let response = self.api.get::<DomainsResponse>("domains").await?;
        Ok(response.into_data()?.domains)
    }

    pub async fn create(
        &self,
        request: CreateShortLinkRequest,
    ) -> Result<CreateShortLinkResponse, error::SystemError> {
        utils::validate(&request)?;

        let response = self.api.post::<_, CreateShortLinkResponse>("shorten", &request).await?;
        let created = response.into_data()?;

        self.repo
            .insert(&NewShortLink {
                domain: request.domain.clone(),
                slug: created.slug.clone(),
                short_url: created.short_url.clone(),
                target_url: request.target_url,
                title: request.title,
                custom_slug: created.custom_slug.clone(),
            })
            .await?;
        log::debug!("cached short link {}/{}", request.domain, created.slug);

        Ok(created)
    }

    pub async fn update(&self, request: UpdateShortLinkRequest) -> Result<(), error::SystemError> {
        utils::validate(&request)?;

        self.api.put::<_, serde_json::Value>("shorten", &request).await?.into_unit()?;

        self.repo
            .update(&request.domain, &request.slug, &request.target_url, Some(&request.title))
            .await
    }

    pub async fn delete(&self, domain: &str, slug: &str) -> Result<(), error::SystemError> {
        let request =
            DeleteShortLinkRequest { domain: domain.to_string(), slug: slug.to_string() };
        self.api.delete::<_, serde_json::Value>("shorten", &request).await?.into_unit()?;

        self.repo.delete(domain, slug).await
    }

    pub async fn visit_stat(
        &self,
        domain: &str,
        slug: &str,
        period: &str,
    ) -> Result<VisitStatResponse, error::SystemError> {
        let response = self
            .api
            .get_with_query::<VisitStatResponse, _>(
                "link/visit-stat",
                &[("domain", domain), ("slug", slug), ("period", period)],
            )
            .await?;
        response.into_data()
    }

    pub async fn list_local(&self) -> Result<Vec<ShortLinkEntity>, error::SystemError> {
        self.repo.list().await
    }

    pub async fn search_local(
        &self,
        query: &str,
    ) -> Result<Vec<ShortLinkEntity>, error::SystemError> {
        self.repo.search(query).await
    }

    pub async fn clear_local(&self) -> Result<(), error::SystemError> {
        self.repo.clear().await
    }
}
