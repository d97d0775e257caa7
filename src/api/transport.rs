use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use super::error::ApiError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Performs a GET and decodes the body as JSON. No throttling or interpretation
/// of the body happens here.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, url: &Url) -> Result<Value, ApiError>;
}

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestTransport {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get_json(&self, url: &Url) -> Result<Value, ApiError> {
        let res = self.client.get(url.clone()).send().await?;

        if !res.status().is_success() {
            return Err(ApiError::Status(res.status()));
        }

        let text = res.text().await?;
        let data = serde_json::from_str::<Value>(&text)?;

        Ok(data)
    }
}
