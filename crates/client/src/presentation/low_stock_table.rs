//! Low-stock table rows.

use stockwatch_domain::{item_stock_percentage, Item};

pub const NO_LOW_STOCK_MESSAGE: &str =
    "You don't have any items below their threshold levels.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockRow<'a> {
    pub item: &'a Item,
    /// Stock as a share of the threshold, capped at 100.
    pub percentage: u8,
}

pub fn low_stock_rows(items: &[Item]) -> Vec<LowStockRow<'_>> {
    items
        .iter()
        .filter(|item| item.is_low_stock())
        .map(|item| LowStockRow {
            item,
            percentage: item_stock_percentage(item),
        })
        .collect()
}
