//! Low-stock watcher
//!
//! Looks at the cached items after every change and decides which ones
//! deserve a warning.

use std::collections::HashSet;

use stockwatch_domain::{Item, ItemId};

/// When to repeat a warning for an item that stays low.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertMode {
    /// Warn once when an item drops below its threshold. It warns again only
    /// after recovering and dropping again.
    #[default]
    EdgeTriggered,
    /// Warn about every low item on every change.
    Repeating,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockAlert {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: u32,
}

impl LowStockAlert {
    fn for_item(item: &Item) -> Self {
        Self {
            item_id: item.id,
            name: item.name.as_str().to_string(),
            quantity: item.quantity,
        }
    }

    pub fn message(&self) -> String {
        format!(
            "Low stock alert: {} has only {} left!",
            self.name, self.quantity
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct LowStockWatcher {
    mode: AlertMode,
    below: HashSet<ItemId>,
}

impl LowStockWatcher {
    pub fn new(mode: AlertMode) -> Self {
        Self {
            mode,
            below: HashSet::new(),
        }
    }

    /// Inspect the current items and return the alerts to raise, in list
    /// order.
    pub fn observe(&mut self, items: &[Item]) -> Vec<LowStockAlert> {
        let low: Vec<&Item> = items.iter().filter(|item| item.is_low_stock()).collect();

        let alerts = low
            .iter()
            .filter(|item| match self.mode {
                AlertMode::Repeating => true,
                AlertMode::EdgeTriggered => !self.below.contains(&item.id),
            })
            .map(|item| LowStockAlert::for_item(item))
            .collect();

        // Recovered and deleted items drop out here.
        self.below = low.iter().map(|item| item.id).collect();
        alerts
    }
}
