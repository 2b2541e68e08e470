//! Stockwatch domain.
//!
//! Core types shared by the engine and the client: the [`Item`] entity, its
//! validated value objects, identifiers, and the pure stock views computed
//! over item lists.

extern crate self as stockwatch_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod stock;
pub mod value_objects;

pub use entities::{Category, Item, StockStatus};
pub use error::DomainError;
pub use ids::ItemId;
pub use stock::{
    category_breakdown, category_totals, item_stock_percentage, low_stock_items,
    stock_percentage, total_item_count, InventorySummary,
};
pub use value_objects::{ItemName, Threshold};
