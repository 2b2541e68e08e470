//! reqwest adapter for the engine's REST API
//!
//! Implements `RawApiPort` over HTTP with JSON bodies.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use stockwatch_shared::ErrorBody;

use crate::config::ClientConfig;
use crate::ports::outbound::{ApiError, RawApiPort};

/// HTTP client for the engine
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_json(response).await
    }
}

async fn read_json(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(&error_text),
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Pull the message out of an `{ "error": ... }` body, or fall back to the
/// raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[async_trait]
impl RawApiPort for HttpApiClient {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.send(self.client.get(self.url(path))).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    async fn delete_json(&self, path: &str) -> Result<Value, ApiError> {
        self.send(self.client.delete(self.url(path))).await
    }
}
