//! Domain entities

mod item;

pub use item::{Category, Item, StockStatus};
