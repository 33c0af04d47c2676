use crate::{
    api::error,
    modules::shortlink::{model::NewShortLink, schema::ShortLinkEntity},
};

#[async_trait::async_trait]
pub trait ShortLinkRepository {
    async fn insert(&self, link: &NewShortLink) -> Result<ShortLinkEntity, error::SystemError>;

    async fn list(&self) -> Result<Vec<ShortLinkEntity>, error::SystemError>;

    async fn search(&self, query: &str) -> Result<Vec<ShortLinkEntity>, error::SystemError>;

    async fn update(
        &self,
        domain: &str,
        slug: &str,
        target_url: &str,
        title: Option<&str>,
    ) -> Result<(), error::SystemError>;

    async fn delete(&self, domain: &str, slug: &str) -> Result<(), error::SystemError>;

    async fn clear(&self) -> Result<(), error::SystemError>;
}
