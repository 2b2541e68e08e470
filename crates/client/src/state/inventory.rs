//! Inventory client state
//!
//! `InventoryState` is the in-memory item cache with pure transitions.
//! `InventoryStore` runs each remote call first and applies the matching
//! transition only when the call succeeds.

use std::collections::BTreeMap;
use std::sync::Arc;

use stockwatch_domain::{stock, Category, InventorySummary, Item, ItemId};

use crate::application::{InventoryService, NewItem, ServiceError};
use crate::ports::outbound::{NotificationLevel, NotificationPort};

use super::alerts::{AlertMode, LowStockWatcher};

/// Cached copy of the engine's items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryState {
    items: Vec<Item>,
    loaded: bool,
}

impl InventoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Whether a full fetch has completed at least once.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
        self.loaded = true;
    }

    pub fn insert(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Patch one item's quantity. Returns the patched item, or `None` if the
    /// id is not cached.
    pub fn set_quantity(&mut self, id: ItemId, quantity: u32) -> Option<&Item> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.quantity = quantity;
        Some(item)
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn low_stock_items(&self) -> Vec<&Item> {
        stock::low_stock_items(&self.items)
    }

    pub fn total_item_count(&self) -> u64 {
        stock::total_item_count(&self.items)
    }

    pub fn category_totals(&self) -> BTreeMap<Category, u64> {
        stock::category_totals(&self.items)
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary::from_items(&self.items)
    }
}

/// Quantity left after dispatching `units` of `item`.
///
/// Dispatching needs at least one unit and no more than the stock on hand.
pub fn remaining_after_dispatch(item: &Item, units: u32) -> Result<u32, ServiceError> {
    if units == 0 || units > item.quantity {
        return Err(ServiceError::InvalidDispatch {
            name: item.name.as_str().to_string(),
            requested: units,
            available: item.quantity,
        });
    }
    Ok(item.quantity - units)
}

/// The inventory cache wired to the engine and to user notifications.
pub struct InventoryStore {
    service: InventoryService,
    notifier: Arc<dyn NotificationPort>,
    watcher: LowStockWatcher,
    state: InventoryState,
}

impl InventoryStore {
    pub fn new(
        service: InventoryService,
        notifier: Arc<dyn NotificationPort>,
        alert_mode: AlertMode,
    ) -> Self {
        Self {
            service,
            notifier,
            watcher: LowStockWatcher::new(alert_mode),
            state: InventoryState::new(),
        }
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    /// Fetch every item and replace the cache.
    pub async fn refresh(&mut self) -> Result<(), ServiceError> {
        match self.service.list_items().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Inventory loaded");
                self.state.replace_all(items);
                self.check_stock();
                Ok(())
            }
            Err(e) => Err(self.report_failure("fetching items", "Failed to load items", e)),
        }
    }

    pub async fn add_item(&mut self, new_item: NewItem) -> Result<Item, ServiceError> {
        let item = match self.service.create_item(&new_item).await {
            Ok(item) => item,
            Err(e) => return Err(self.report_failure("adding item", "Failed to add item", e)),
        };

        self.state.insert(item.clone());
        self.notifier
            .notify(NotificationLevel::Success, "Item added successfully!");
        self.check_stock();
        Ok(item)
    }

    /// Ship `units` of a cached item. The remaining stock is what gets sent
    /// to the engine.
    pub async fn dispatch_item(&mut self, id: ItemId, units: u32) -> Result<Item, ServiceError> {
        let remaining = match self.state.get(id) {
            Some(item) => remaining_after_dispatch(item, units),
            None => Err(ServiceError::ItemNotFound(id)),
        };
        match remaining {
            Ok(remaining) => self.set_quantity(id, remaining).await,
            Err(e) => Err(self.report_failure("dispatching item", "Failed to update item", e)),
        }
    }

    pub async fn set_quantity(&mut self, id: ItemId, quantity: u32) -> Result<Item, ServiceError> {
        let updated = match self.service.update_quantity(id, quantity).await {
            Ok(Some(item)) => item,
            Ok(None) => {
                return Err(self.report_failure(
                    "updating item",
                    "Failed to update item",
                    ServiceError::ItemNotFound(id),
                ))
            }
            Err(e) => return Err(self.report_failure("updating item", "Failed to update item", e)),
        };

        if self.state.set_quantity(id, updated.quantity).is_none() {
            tracing::debug!(item_id = %id, "Updated item was not cached");
        }
        self.notifier.notify(
            NotificationLevel::Success,
            &format!("{} updated successfully!", updated.name),
        );
        self.check_stock();
        Ok(updated)
    }

    pub async fn delete_item(&mut self, id: ItemId) -> Result<(), ServiceError> {
        if let Err(e) = self.service.delete_item(id).await {
            return Err(self.report_failure("deleting item", "Failed to delete item", e));
        }

        let name = match self.state.remove(id) {
            Some(item) => item.name.to_string(),
            None => "Item".to_string(),
        };
        self.notifier.notify(
            NotificationLevel::Success,
            &format!("{name} deleted successfully!"),
        );
        self.check_stock();
        Ok(())
    }

    fn check_stock(&mut self) {
        for alert in self.watcher.observe(self.state.items()) {
            self.notifier
                .notify(NotificationLevel::Warning, &alert.message());
        }
    }

    fn report_failure(&self, action: &str, toast: &str, error: ServiceError) -> ServiceError {
        tracing::error!(error = %error, "Error {action}");
        self.notifier.notify(
            NotificationLevel::Error,
            &format!("{toast}. Please try again."),
        );
        error
    }
}
