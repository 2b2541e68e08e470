//! Stockwatch Shared - Wire types for Engine and Client communication
//!
//! This crate contains the JSON bodies exchanged over the REST API:
//! - Request DTOs (create item, update quantity)
//! - Response DTOs (item record, delete confirmation, error body)
//! - Route paths used by both sides
//!
//! # Design Principles
//!
//! 1. **No business logic** - Pure data types and serialization
//! 2. **Lenient requests** - request fields are optional and loosely typed so
//!    the engine can report every missing or out-of-range value as a
//!    validation error instead of a serde rejection
//! 3. **No domain IDs** - use raw `uuid::Uuid` in DTOs

pub mod requests;
pub mod responses;
pub mod routes;

pub use requests::{CreateItemRequest, UpdateQuantityRequest};
pub use responses::{DeleteItemResponse, ErrorBody, ItemData, ITEM_DELETED_MESSAGE};
