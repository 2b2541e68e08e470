//! Create item use case.
//!
//! Validates a submitted item and inserts it into the store.

use std::str::FromStr;
use std::sync::Arc;

use chrono::SubsecRound;
use stockwatch_domain::{Category, Item, ItemName, Threshold};

use crate::infrastructure::ports::{ClockPort, ItemRepo};
use crate::use_cases::validation::{require_count, ValidationError};

use super::error::InventoryError;

/// Raw fields for a new item, as received from the caller.
///
/// Every field is optional here so that missing input is reported as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default)]
pub struct CreateItemInput {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub category: Option<String>,
    pub threshold: Option<i64>,
}

/// Create item use case.
pub struct CreateItem {
    item_repo: Arc<dyn ItemRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CreateItem {
    pub fn new(item_repo: Arc<dyn ItemRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { item_repo, clock }
    }

    /// Execute the create item use case.
    ///
    /// # Returns
    /// * `Ok(Item)` - The stored record, with a fresh id and `date_added`
    /// * `Err(InventoryError)` - Invalid input or a store failure
    pub async fn execute(&self, input: CreateItemInput) -> Result<Item, InventoryError> {
        let (name, quantity, category) = match (input.name, input.quantity, input.category) {
            (Some(name), Some(quantity), Some(category)) => (name, quantity, category),
            (name, quantity, category) => {
                return Err(ValidationError::missing([
                    ("name", name.is_none()),
                    ("quantity", quantity.is_none()),
                    ("category", category.is_none()),
                ])
                .into())
            }
        };

        let name = ItemName::new(name)?;
        let quantity = require_count(quantity, "quantity")?;
        let category = Category::from_str(&category)?;
        let threshold = match input.threshold {
            Some(value) => Threshold::new(require_count(value, "threshold")?)?,
            None => Threshold::DEFAULT,
        };

        // The store keeps millisecond precision; stamp at that precision so the
        // returned record matches every later read.
        let date_added = self.clock.now().trunc_subsecs(3);
        let item = Item::new(name, quantity, category, threshold, date_added);
        let item = self.item_repo.create(item).await?;

        tracing::info!(
            item_id = %item.id,
            name = %item.name,
            quantity = item.quantity,
            category = %item.category,
            "Item created"
        );

        Ok(item)
    }
}
