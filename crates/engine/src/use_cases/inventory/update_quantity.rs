//! Update quantity use case.
//!
//! Replaces an item's stock count. Dispatching stock is an update to the
//! remaining quantity, so both flows land here.

use std::sync::Arc;

use stockwatch_domain::{Item, ItemId};

use crate::infrastructure::ports::ItemRepo;
use crate::use_cases::validation::{require_count, ValidationError};

use super::error::InventoryError;

pub struct UpdateQuantity {
    item_repo: Arc<dyn ItemRepo>,
}

impl UpdateQuantity {
    pub fn new(item_repo: Arc<dyn ItemRepo>) -> Self {
        Self { item_repo }
    }

    /// Set `id`'s quantity to `quantity`.
    ///
    /// Returns `Ok(None)` when no item has that id.
    pub async fn execute(
        &self,
        id: ItemId,
        quantity: Option<i64>,
    ) -> Result<Option<Item>, InventoryError> {
        let quantity = quantity.ok_or_else(|| ValidationError::missing([("quantity", true)]))?;
        let quantity = require_count(quantity, "quantity")?;

        let updated = self.item_repo.update_quantity(id, quantity).await?;
        match &updated {
            Some(item) => tracing::info!(
                item_id = %id,
                quantity,
                low_stock = item.is_low_stock(),
                "Item quantity updated"
            ),
            None => tracing::debug!(item_id = %id, "Quantity update for unknown item"),
        }

        Ok(updated)
    }
}
