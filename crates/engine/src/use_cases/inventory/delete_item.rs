//! Delete item use case.

use std::sync::Arc;

use stockwatch_domain::ItemId;

use crate::infrastructure::ports::ItemRepo;

use super::error::InventoryError;

/// Removes an item. Deleting an id that is not stored succeeds.
pub struct DeleteItem {
    item_repo: Arc<dyn ItemRepo>,
}

impl DeleteItem {
    pub fn new(item_repo: Arc<dyn ItemRepo>) -> Self {
        Self { item_repo }
    }

    pub async fn execute(&self, id: ItemId) -> Result<(), InventoryError> {
        self.item_repo.delete(id).await?;
        tracing::info!(item_id = %id, "Item deleted");
        Ok(())
    }
}
