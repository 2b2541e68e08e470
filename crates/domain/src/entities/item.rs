//! Item entity - A stocked product line in the warehouse
//!
//! One record per product line. Quantity is the current stock count; the
//! threshold marks the level below which the item is reported as low stock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, ItemId, ItemName, Threshold};

/// A single inventory record.
///
/// # Simple Data Struct
///
/// Fields are public: the name and threshold are validated by their value
/// object types, and every `u32` quantity is a valid stock count.
/// `date_added` is set once by the creator and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    pub quantity: u32,
    pub category: Category,
    pub threshold: Threshold,
    pub date_added: DateTime<Utc>,
}

impl Item {
    pub fn new(
        name: ItemName,
        quantity: u32,
        category: Category,
        threshold: Threshold,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ItemId::new(),
            name,
            quantity,
            category,
            threshold,
            date_added,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Low stock means strictly below the threshold.
    pub fn is_low_stock(&self) -> bool {
        self.threshold.is_breached_by(self.quantity)
    }

    pub fn status(&self) -> StockStatus {
        if self.is_low_stock() {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

/// Fixed set of classification labels for items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Furniture,
    Clothing,
    Food,
    Tools,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Self::Electronics,
        Self::Furniture,
        Self::Clothing,
        Self::Food,
        Self::Tools,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Furniture => "Furniture",
            Self::Clothing => "Clothing",
            Self::Food => "Food",
            Self::Tools => "Tools",
            Self::Other => "Other",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Electronics
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("Unknown category: {}", s)))
    }
}

/// Row status shown next to each item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    LowStock,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InStock => write!(f, "In Stock"),
            Self::LowStock => write!(f, "Low Stock"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn widget(quantity: u32, threshold: u32) -> Item {
        Item::new(
            ItemName::new("Widget").unwrap(),
            quantity,
            Category::Tools,
            Threshold::new(threshold).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        assert!(widget(2, 5).is_low_stock());
        assert!(widget(0, 5).is_low_stock());
        assert!(!widget(5, 5).is_low_stock());
        assert!(!widget(9, 5).is_low_stock());
    }

    #[test]
    fn status_follows_low_stock() {
        assert_eq!(widget(1, 5).status(), StockStatus::LowStock);
        assert_eq!(widget(10, 5).status(), StockStatus::InStock);
        assert_eq!(StockStatus::LowStock.to_string(), "Low Stock");
    }

    #[test]
    fn with_quantity_keeps_identity() {
        let item = widget(3, 5);
        let updated = item.clone().with_quantity(0);
        assert_eq!(updated.id, item.id);
        assert_eq!(updated.date_added, item.date_added);
        assert_eq!(updated.quantity, 0);
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("tools".parse::<Category>().unwrap(), Category::Tools);
        assert_eq!(" Food ".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("ELECTRONICS".parse::<Category>().unwrap(), Category::Electronics);
    }

    #[test]
    fn unknown_category_rejected() {
        let err = "Toys".parse::<Category>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn category_display_round_trips() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }
}
