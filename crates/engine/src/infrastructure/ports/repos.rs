//! Repository port traits.

use async_trait::async_trait;
use stockwatch_domain::{Item, ItemId};

use super::RepoError;

/// The single persisted collection of items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepo: Send + Sync {
    /// Insert a fully-formed item and return the stored record.
    async fn create(&self, item: Item) -> Result<Item, RepoError>;

    async fn get(&self, id: ItemId) -> Result<Option<Item>, RepoError>;

    /// Every record in insertion order.
    async fn list_all(&self) -> Result<Vec<Item>, RepoError>;

    /// Replace the quantity in place. `None` when the id is unknown.
    async fn update_quantity(&self, id: ItemId, quantity: u32)
        -> Result<Option<Item>, RepoError>;

    /// Remove the record; absent ids are not an error.
    async fn delete(&self, id: ItemId) -> Result<(), RepoError>;
}
