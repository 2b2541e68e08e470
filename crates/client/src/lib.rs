//! Stockwatch client.
//!
//! Talks to the engine over HTTP, keeps the item cache, and holds the state
//! behind the inventory screens.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod presentation;
pub mod state;

pub use application::{InventoryService, NewItem, ServiceError};
pub use config::ClientConfig;
pub use infrastructure::{HttpApiClient, TracingNotifier};
pub use state::{AlertMode, InventoryState, InventoryStore};
