//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod inventory;
pub mod validation;

pub use inventory::InventoryUseCases;
