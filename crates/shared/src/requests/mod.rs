//! Request bodies accepted by the engine

mod items;

pub use items::{CreateItemRequest, UpdateQuantityRequest};
