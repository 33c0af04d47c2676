use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::error;
use crate::modules::usage::schema::UsageResponse;

#[derive(Clone)]
pub struct UsageService {
    api: Arc<ApiClient>,
}

impl UsageService {
    pub fn with_dependencies(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn usage(&self) -> Result<UsageResponse, error::SystemError> {
        let response = self.api.get::<UsageResponse>("usage").await?;

        // The usage endpoint answers code 0 on some deployments.
        match response {
            response if response.code == 200 || response.code == 0 => {
                response.data.ok_or_else(|| error::SystemError::api(0, None))
            }
            response => Err(error::SystemError::api(response.code, response.message)),
        }
    }
}
