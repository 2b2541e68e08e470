//! REST paths served by the engine

use uuid::Uuid;

/// Collection path for items
pub const ITEMS: &str = "/api/items";

/// Liveness probe
pub const HEALTH: &str = "/api/health";

/// Path of a single item record
pub fn item(id: Uuid) -> String {
    format!("{ITEMS}/{id}")
}
