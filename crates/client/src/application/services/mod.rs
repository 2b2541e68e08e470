//! Application services
//!
//! Services depend on port traits, not concrete infrastructure
//! implementations.

pub mod inventory_service;

pub use inventory_service::{InventoryService, NewItem};
