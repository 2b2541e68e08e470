use serde::{Deserialize, Serialize};

/// Body of `POST /api/items`.
///
/// Every field is optional on the wire; the engine rejects a missing name,
/// quantity or category. A missing threshold falls back to the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
}

/// Body of `PUT /api/items/{id}`. Only the quantity is mutable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityRequest {
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl UpdateQuantityRequest {
    pub fn new(quantity: u32) -> Self {
        Self {
            quantity: Some(i64::from(quantity)),
        }
    }
}
