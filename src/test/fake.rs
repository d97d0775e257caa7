use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use tokio::time::Instant;

use crate::api::{ApiError, Transport};

/// Answers every request with the same body and records when each request
/// reached the transport.
#[derive(Clone)]
pub struct FakeTransport {
    body: Value,
    requests: Arc<Mutex<Vec<(Instant, Url)>>>,
}

impl FakeTransport {
    pub fn new(body: Value) -> Self {
        Self {
            body,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<(Instant, Url)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get_json(&self, url: &Url) -> Result<Value, ApiError> {
        self.requests.lock().unwrap().push((Instant::now(), url.clone()));
        Ok(self.body.clone())
    }
}

pub struct UnavailableTransport;

#[async_trait]
impl Transport for UnavailableTransport {
    async fn get_json(&self, _url: &Url) -> Result<Value, ApiError> {
        Err(ApiError::Status(StatusCode::SERVICE_UNAVAILABLE))
    }
}

pub fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
