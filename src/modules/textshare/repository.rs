use crate::{
    api::error,
    modules::textshare::{model::NewTextShare, schema::TextShareEntity},
};

#[async_trait::async_trait]
pub trait TextShareRepository {
    async fn insert(&self, share: &NewTextShare) -> Result<TextShareEntity, error::SystemError>;

    async fn list(&self) -> Result<Vec<TextShareEntity>, error::SystemError>;

    async fn search(&self, query: &str) -> Result<Vec<TextShareEntity>, error::SystemError>;

    async fn update(
        &self,
        domain: &str,
        slug: &str,
        content: &str,
        title: &str,
    ) -> Result<(), error::SystemError>;

    async fn delete(&self, domain: &str, slug: &str) -> Result<(), error::SystemError>;

    async fn clear(&self) -> Result<(), error::SystemError>;
}
