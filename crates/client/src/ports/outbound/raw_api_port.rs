//! Raw API Port - Object-safe HTTP boundary
//!
//! Adapters exchange untyped JSON so the trait can live behind
//! `Arc<dyn RawApiPort>`. The application layer's `InventoryService` adds the
//! typed wrapper on top.

use async_trait::async_trait;
use serde_json::Value;

use super::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn delete_json(&self, path: &str) -> Result<Value, ApiError>;
}
