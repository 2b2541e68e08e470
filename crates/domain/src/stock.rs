//! Stock views - pure aggregates over a list of items
//!
//! Everything here is recomputed on read from whatever list the caller holds.
//! Nothing is cached and nothing touches I/O.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Category, Item};

/// Number of low-stock items shown in the dashboard preview.
pub const LOW_STOCK_PREVIEW_LEN: usize = 5;

/// Items whose quantity is strictly below their threshold, in input order.
pub fn low_stock_items(items: &[Item]) -> Vec<&Item> {
    items.iter().filter(|item| item.is_low_stock()).collect()
}

/// Sum of quantities across all items.
pub fn total_item_count(items: &[Item]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

/// Quantity per category.
///
/// Categories with no items are absent rather than zero.
pub fn category_totals(items: &[Item]) -> BTreeMap<Category, u64> {
    items.iter().fold(BTreeMap::new(), |mut totals, item| {
        *totals.entry(item.category).or_insert(0) += u64::from(item.quantity);
        totals
    })
}

/// Quantity as a percentage of the threshold, rounded half up and capped at 100.
pub fn stock_percentage(quantity: u32, threshold: u32) -> u8 {
    if threshold == 0 {
        return 100;
    }
    let quantity = u64::from(quantity);
    let threshold = u64::from(threshold);
    let rounded = (quantity * 200 + threshold) / (threshold * 2);
    rounded.min(100) as u8
}

/// [`stock_percentage`] for a single item.
pub fn item_stock_percentage(item: &Item) -> u8 {
    stock_percentage(item.quantity, item.threshold.value())
}

/// One entry per category in display order, zero-filled, for charts.
pub fn category_breakdown(items: &[Item]) -> Vec<(Category, u64)> {
    let totals = category_totals(items);
    Category::ALL
        .into_iter()
        .map(|category| (category, totals.get(&category).copied().unwrap_or(0)))
        .collect()
}

/// Dashboard figures derived from the full item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    /// Sum of all quantities
    pub total_quantity: u64,
    /// Number of item records
    pub unique_products: usize,
    /// Categories whose total quantity is positive
    pub active_categories: usize,
    pub low_stock_count: usize,
    /// Total quantity divided by active categories, rounded; 0 without any
    pub average_per_category: u64,
    /// First few low-stock items, in list order
    pub low_stock_preview: Vec<Item>,
}

impl InventorySummary {
    pub fn from_items(items: &[Item]) -> Self {
        let total_quantity = total_item_count(items);
        let active_categories = category_totals(items)
            .values()
            .filter(|total| **total > 0)
            .count();
        let low = low_stock_items(items);

        let average_per_category = if active_categories > 0 {
            let divisor = active_categories as u64;
            (total_quantity * 2 + divisor) / (divisor * 2)
        } else {
            0
        };

        Self {
            total_quantity,
            unique_products: items.len(),
            active_categories,
            low_stock_count: low.len(),
            average_per_category,
            low_stock_preview: low
                .into_iter()
                .take(LOW_STOCK_PREVIEW_LEN)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ItemName, Threshold};
    use chrono::Utc;

    fn item(name: &str, quantity: u32, category: Category, threshold: u32) -> Item {
        Item::new(
            ItemName::new(name).unwrap(),
            quantity,
            category,
            Threshold::new(threshold).unwrap(),
            Utc::now(),
        )
    }

    #[test]
    fn low_stock_of_empty_list_is_empty() {
        assert!(low_stock_items(&[]).is_empty());
    }

    #[test]
    fn low_stock_returns_exact_subset() {
        let items = vec![
            item("Laptop", 2, Category::Electronics, 5),
            item("Desk", 5, Category::Furniture, 5),
            item("Hammer", 0, Category::Tools, 1),
            item("Apples", 40, Category::Food, 10),
        ];
        let names: Vec<&str> = low_stock_items(&items)
            .into_iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Laptop", "Hammer"]);
    }

    #[test]
    fn low_stock_of_all_low_list_is_full_list() {
        let items = vec![
            item("A", 1, Category::Other, 5),
            item("B", 0, Category::Other, 2),
        ];
        assert_eq!(low_stock_items(&items).len(), items.len());
    }

    #[test]
    fn total_count_sums_quantities() {
        let items = vec![
            item("A", 3, Category::Tools, 5),
            item("B", 7, Category::Food, 5),
        ];
        assert_eq!(total_item_count(&items), 10);
        assert_eq!(total_item_count(&[]), 0);
    }

    #[test]
    fn category_totals_omit_missing_categories() {
        let items = vec![
            item("Drill", 3, Category::Tools, 5),
            item("Saw", 4, Category::Tools, 5),
            item("Shirt", 10, Category::Clothing, 5),
        ];
        let totals = category_totals(&items);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&Category::Tools], 7);
        assert_eq!(totals[&Category::Clothing], 10);
        assert!(!totals.contains_key(&Category::Food));
    }

    #[test]
    fn category_breakdown_zero_fills() {
        let items = vec![item("Drill", 3, Category::Tools, 5)];
        let breakdown = category_breakdown(&items);
        assert_eq!(breakdown.len(), Category::ALL.len());
        assert_eq!(breakdown[0], (Category::Electronics, 0));
        assert_eq!(breakdown[4], (Category::Tools, 3));
    }

    #[test]
    fn stock_percentage_examples() {
        assert_eq!(stock_percentage(3, 10), 30);
        assert_eq!(stock_percentage(12, 10), 100);
        assert_eq!(stock_percentage(0, 5), 0);
        assert_eq!(stock_percentage(10, 10), 100);
    }

    #[test]
    fn stock_percentage_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(stock_percentage(1, 8), 13);
        // 1/3 = 33.33%
        assert_eq!(stock_percentage(1, 3), 33);
        // 2/3 = 66.67%
        assert_eq!(stock_percentage(2, 3), 67);
    }

    #[test]
    fn summary_of_mixed_inventory() {
        let items = vec![
            item("Laptop", 2, Category::Electronics, 5),
            item("Monitor", 10, Category::Electronics, 5),
            item("Chair", 0, Category::Furniture, 3),
            item("Rice", 5, Category::Food, 2),
        ];
        let summary = InventorySummary::from_items(&items);
        assert_eq!(summary.total_quantity, 17);
        assert_eq!(summary.unique_products, 4);
        // Furniture total is 0, so it is not active
        assert_eq!(summary.active_categories, 2);
        assert_eq!(summary.low_stock_count, 2);
        // 17 / 2 = 8.5 -> 9
        assert_eq!(summary.average_per_category, 9);
        assert_eq!(summary.low_stock_preview.len(), 2);
    }

    #[test]
    fn summary_preview_is_capped() {
        let items: Vec<Item> = (0..8)
            .map(|i| item(&format!("Item {i}"), 0, Category::Other, 5))
            .collect();
        let summary = InventorySummary::from_items(&items);
        assert_eq!(summary.low_stock_count, 8);
        assert_eq!(summary.low_stock_preview.len(), LOW_STOCK_PREVIEW_LEN);
        assert_eq!(summary.low_stock_preview[0].name.as_str(), "Item 0");
    }

    #[test]
    fn summary_of_empty_inventory() {
        let summary = InventorySummary::from_items(&[]);
        assert_eq!(summary.total_quantity, 0);
        assert_eq!(summary.active_categories, 0);
        assert_eq!(summary.average_per_category, 0);
        assert!(summary.low_stock_preview.is_empty());
    }
}
