//! Item table: search and sort over the cached items.

use std::cmp::Ordering;

use stockwatch_domain::{Item, StockStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Quantity,
    Category,
    DateAdded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// One visible row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow<'a> {
    pub item: &'a Item,
    pub status: StockStatus,
    /// Nothing to dispatch at zero stock.
    pub can_dispatch: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemTable {
    search: String,
    sort: Option<SortConfig>,
}

impl ItemTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn sort(&self) -> Option<SortConfig> {
        self.sort
    }

    /// Sort by `key`. Asking for the current key while ascending flips to
    /// descending; anything else sorts ascending.
    pub fn request_sort(&mut self, key: SortKey) {
        let direction = match self.sort {
            Some(current)
                if current.key == key && current.direction == SortDirection::Ascending =>
            {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortConfig { key, direction });
    }

    /// Whether `item` matches the search term (case-insensitive, name or
    /// category).
    pub fn matches(&self, item: &Item) -> bool {
        let term = self.search.to_lowercase();
        item.name.as_str().to_lowercase().contains(&term)
            || item.category.as_str().to_lowercase().contains(&term)
    }

    /// Filtered and sorted rows. Sorting is stable, so equal keys keep list
    /// order.
    pub fn rows<'a>(&self, items: &'a [Item]) -> Vec<TableRow<'a>> {
        let mut visible: Vec<&Item> = items.iter().filter(|item| self.matches(item)).collect();

        if let Some(sort) = self.sort {
            visible.sort_by(|a, b| {
                let ordering = compare(a, b, sort.key);
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        visible
            .into_iter()
            .map(|item| TableRow {
                item,
                status: item.status(),
                can_dispatch: item.quantity > 0,
            })
            .collect()
    }

    /// Text shown when `rows` comes back empty.
    pub fn empty_message(&self) -> String {
        if self.search.is_empty() {
            "No items in inventory".to_string()
        } else {
            format!("No items found for \"{}\"", self.search)
        }
    }
}

fn compare(a: &Item, b: &Item, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.as_str().cmp(b.name.as_str()),
        SortKey::Quantity => a.quantity.cmp(&b.quantity),
        SortKey::Category => a.category.as_str().cmp(b.category.as_str()),
        SortKey::DateAdded => a.date_added.cmp(&b.date_added),
    }
}
