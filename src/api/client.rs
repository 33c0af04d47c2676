use reqwest::{header, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

use crate::api::{error::SystemError, response::ApiResponse};

static USER_AGENT: &str = concat!("see-cli/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for the SEE API. The API key, when configured, is sent
/// verbatim as the `Authorization` header; requests without a key omit the
/// header so unauthenticated endpoints keep working.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, SystemError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self { http, base_url, api_key })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.endpoint(path));
        if let Some(key) = &self.api_key {
            builder = builder.header(header::AUTHORIZATION, key);
        }
        builder
    }

    async fn send<T>(&self, builder: RequestBuilder) -> Result<ApiResponse<T>, SystemError>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await?;
        log::debug!("{} {}", response.status(), response.url());
        Ok(response.json::<ApiResponse<T>>().await?)
    }

    pub async fn get<T>(&self, path: &str) -> Result<ApiResponse<T>, SystemError>
    where
        T: DeserializeOwned,
    {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn get_with_query<T, Q>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<ApiResponse<T>, SystemError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    /// For the odd endpoint that answers outside the `ApiResponse` envelope.
    pub async fn get_raw<T>(&self, path: &str) -> Result<T, SystemError>
    where
        T: DeserializeOwned,
    {
        let response = self.request(Method::GET, path).send().await?;
        log::debug!("{} {}", response.status(), response.url());
        Ok(response.json::<T>().await?)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, SystemError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, SystemError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    /// The SEE delete endpoints take a JSON body identifying the resource.
    pub async fn delete<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, SystemError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::DELETE, path).json(body)).await
    }

    pub async fn upload<T>(
        &self,
        path: &str,
        field: &str,
        filename: &str,
        bytes: Vec<u8>,
        mime_type: &str,
    ) -> Result<ApiResponse<T>, SystemError>
    where
        T: DeserializeOwned,
    {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime_type)?;
        let form = reqwest::multipart::Form::new().part(field.to_string(), part);

        self.send(self.request(Method::POST, path).multipart(form)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_relative_paths() {
        let client = ApiClient::new("https://s.ee/api/v1", None, 30).unwrap();
        assert_eq!(client.endpoint("shorten"), "https://s.ee/api/v1/shorten");
        assert_eq!(client.endpoint("/shorten"), "https://s.ee/api/v1/shorten");
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let with = ApiClient::new("https://s.ee/api/v1/", None, 30).unwrap();
        let without = ApiClient::new("https://s.ee/api/v1", None, 30).unwrap();
        assert_eq!(with.endpoint("usage"), without.endpoint("usage"));
    }
}
