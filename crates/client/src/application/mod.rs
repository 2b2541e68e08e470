//! Application layer: typed services over the outbound ports.

pub mod error;
pub mod services;

pub use error::ServiceError;
pub use services::{InventoryService, NewItem};
