//! Response bodies returned by the engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockwatch_domain::{Category, DomainError, Item, ItemId, ItemName, Threshold};

/// Confirmation text returned by `DELETE /api/items/{id}`
pub const ITEM_DELETED_MESSAGE: &str = "Item deleted successfully";

/// An item record as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemData {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub category: Category,
    pub threshold: u32,
    pub date_added: DateTime<Utc>,
}

impl From<&Item> for ItemData {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_uuid(),
            name: item.name.as_str().to_string(),
            quantity: item.quantity,
            category: item.category,
            threshold: item.threshold.value(),
            date_added: item.date_added,
        }
    }
}

impl From<Item> for ItemData {
    fn from(item: Item) -> Self {
        Self::from(&item)
    }
}

impl TryFrom<ItemData> for Item {
    type Error = DomainError;

    fn try_from(data: ItemData) -> Result<Self, Self::Error> {
        Ok(Item {
            id: ItemId::from_uuid(data.id),
            name: ItemName::new(data.name)?,
            quantity: data.quantity,
            category: data.category,
            threshold: Threshold::new(data.threshold)?,
            date_added: data.date_added,
        })
    }
}

/// Body of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteItemResponse {
    pub message: String,
}

impl Default for DeleteItemResponse {
    fn default() -> Self {
        Self {
            message: ITEM_DELETED_MESSAGE.to_string(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Item {
        Item::new(
            ItemName::new("Widget").unwrap(),
            2,
            Category::Tools,
            Threshold::new(5).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn item_data_uses_camel_case() {
        let json = serde_json::to_value(ItemData::from(sample())).unwrap();
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["category"], "Tools");
        assert_eq!(json["threshold"], 5);
        assert!(json.get("dateAdded").is_some());
        assert!(json.get("date_added").is_none());
    }

    #[test]
    fn item_data_converts_back_to_domain() {
        let item = sample();
        let back = Item::try_from(ItemData::from(&item)).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn invalid_item_data_rejected() {
        let mut data = ItemData::from(sample());
        data.threshold = 0;
        assert!(Item::try_from(data).is_err());
    }

    #[test]
    fn delete_response_default_message() {
        let json = serde_json::to_string(&DeleteItemResponse::default()).unwrap();
        assert_eq!(json, r#"{"message":"Item deleted successfully"}"#);
    }
}
