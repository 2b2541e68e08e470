//! Inventory Service - typed access to the item endpoints
//!
//! Wraps `RawApiPort` with the request and response bodies from
//! `stockwatch_shared` and converts records into domain `Item`s.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use stockwatch_domain::{Category, Item, ItemId, ItemName, Threshold};
use stockwatch_shared::{
    routes, CreateItemRequest, DeleteItemResponse, ItemData, UpdateQuantityRequest,
};

use crate::application::ServiceError;
use crate::ports::outbound::RawApiPort;

/// A validated item ready to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: ItemName,
    pub quantity: u32,
    pub category: Category,
    pub threshold: Threshold,
}

impl From<&NewItem> for CreateItemRequest {
    fn from(item: &NewItem) -> Self {
        Self {
            name: Some(item.name.as_str().to_string()),
            quantity: Some(i64::from(item.quantity)),
            category: Some(item.category.as_str().to_string()),
            threshold: Some(i64::from(item.threshold.value())),
        }
    }
}

/// Inventory service for the item endpoints
pub struct InventoryService {
    api: Arc<dyn RawApiPort>,
}

impl InventoryService {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// Fetch the whole collection
    pub async fn list_items(&self) -> Result<Vec<Item>, ServiceError> {
        let value = self.api.get_json(routes::ITEMS).await?;
        let records: Vec<ItemData> = parse(value)?;
        records.into_iter().map(into_item).collect()
    }

    /// Create an item and return the stored record
    pub async fn create_item(&self, item: &NewItem) -> Result<Item, ServiceError> {
        let body = to_body(&CreateItemRequest::from(item))?;
        let value = self.api.post_json(routes::ITEMS, &body).await?;
        into_item(parse(value)?)
    }

    /// Set an item's quantity. `None` means the engine has no such item.
    pub async fn update_quantity(
        &self,
        id: ItemId,
        quantity: u32,
    ) -> Result<Option<Item>, ServiceError> {
        let body = to_body(&UpdateQuantityRequest::new(quantity))?;
        let value = self
            .api
            .put_json(&routes::item(id.to_uuid()), &body)
            .await?;
        let record: Option<ItemData> = parse(value)?;
        record.map(into_item).transpose()
    }

    pub async fn delete_item(&self, id: ItemId) -> Result<(), ServiceError> {
        let value = self.api.delete_json(&routes::item(id.to_uuid())).await?;
        let response: DeleteItemResponse = parse(value)?;
        tracing::debug!(item_id = %id, message = %response.message, "Item deleted");
        Ok(())
    }
}

fn parse<T: DeserializeOwned>(value: Value) -> Result<T, ServiceError> {
    serde_json::from_value(value).map_err(|e| ServiceError::Parse(e.to_string()))
}

fn to_body<T: serde::Serialize>(body: &T) -> Result<Value, ServiceError> {
    serde_json::to_value(body).map_err(|e| ServiceError::Parse(e.to_string()))
}

fn into_item(data: ItemData) -> Result<Item, ServiceError> {
    Item::try_from(data).map_err(|e| ServiceError::Parse(e.to_string()))
}
