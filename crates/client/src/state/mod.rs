//! Client-side state: the item cache and the low-stock watcher.

pub mod alerts;
pub mod inventory;

pub use alerts::{AlertMode, LowStockAlert, LowStockWatcher};
pub use inventory::{InventoryState, InventoryStore};
