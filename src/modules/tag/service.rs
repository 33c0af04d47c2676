use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::error;
use crate::modules::tag::schema::{Tag, TagsResponse};

/// Tags are server-side only; nothing is cached.
#[derive(Clone)]
pub struct TagService {
    api: Arc<ApiClient>,
}

impl TagService {
    pub fn with_dependencies(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Tag>, error::SystemError> {
        let response = self.api.get::<TagsResponse>("tags").await?;
        Ok(response.into_data()?.tags)
    }
}
