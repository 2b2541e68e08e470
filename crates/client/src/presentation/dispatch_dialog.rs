//! Dispatch dialog state.

use stockwatch_domain::{Item, ItemId};

use crate::application::ServiceError;
use crate::state::inventory::remaining_after_dispatch;

/// Units chosen for dispatching one item. Always within `1..=available`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchDialog {
    item_id: ItemId,
    name: String,
    available: u32,
    units: u32,
}

impl DispatchDialog {
    /// Open the dialog for `item`. Items with no stock cannot be dispatched.
    pub fn open(item: &Item) -> Option<Self> {
        if item.quantity == 0 {
            return None;
        }
        Some(Self {
            item_id: item.id,
            name: item.name.as_str().to_string(),
            available: item.quantity,
            units: 1,
        })
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    pub fn units(&self) -> u32 {
        self.units
    }

    /// Change the unit count. Out-of-range values are ignored and `false` is
    /// returned.
    pub fn set_units(&mut self, units: u32) -> bool {
        if (1..=self.available).contains(&units) {
            self.units = units;
            true
        } else {
            false
        }
    }

    /// Stock left once the chosen units ship.
    pub fn remaining(&self) -> u32 {
        self.available - self.units
    }

    /// Confirm-button text.
    pub fn confirm_label(&self) -> String {
        let noun = if self.units == 1 { "Item" } else { "Items" };
        format!("Dispatch {} {}", self.units, noun)
    }

    /// Re-check the choice against the latest cached copy of the item.
    pub fn confirm(&self, current: &Item) -> Result<u32, ServiceError> {
        if current.id != self.item_id {
            return Err(ServiceError::ItemNotFound(self.item_id));
        }
        remaining_after_dispatch(current, self.units)
    }
}
