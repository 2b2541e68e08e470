//! Inventory use cases.
//!
//! Item creation, quantity updates, deletion, and the read-side queries.

use std::sync::Arc;

use stockwatch_domain::{Item, ItemId};

use crate::infrastructure::ports::{ClockPort, ItemRepo, RepoError};

mod create_item;
mod delete_item;
mod error;
mod update_quantity;

pub use create_item::{CreateItem, CreateItemInput};
pub use delete_item::DeleteItem;
pub use error::InventoryError;
pub use update_quantity::UpdateQuantity;

/// Container for inventory use cases.
pub struct InventoryUseCases {
    pub ops: Arc<InventoryOps>,
    pub create: Arc<CreateItem>,
    pub update_quantity: Arc<UpdateQuantity>,
    pub delete: Arc<DeleteItem>,
}

impl InventoryUseCases {
    pub fn new(item_repo: Arc<dyn ItemRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            ops: Arc::new(InventoryOps::new(item_repo.clone())),
            create: Arc::new(CreateItem::new(item_repo.clone(), clock)),
            update_quantity: Arc::new(UpdateQuantity::new(item_repo.clone())),
            delete: Arc::new(DeleteItem::new(item_repo)),
        }
    }
}

/// Read-only inventory queries.
pub struct InventoryOps {
    item_repo: Arc<dyn ItemRepo>,
}

impl InventoryOps {
    pub fn new(item_repo: Arc<dyn ItemRepo>) -> Self {
        Self { item_repo }
    }

    /// Every stored item, in insertion order.
    pub async fn list_items(&self) -> Result<Vec<Item>, RepoError> {
        self.item_repo.list_all().await
    }

    pub async fn get_item(&self, id: ItemId) -> Result<Option<Item>, RepoError> {
        self.item_repo.get(id).await
    }
}
