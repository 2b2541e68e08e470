//! Presentation state
//!
//! View-model state for the inventory screens. Nothing here renders; it only
//! decides what a view would show.

pub mod add_item_form;
pub mod dispatch_dialog;
pub mod item_table;
pub mod low_stock_table;

pub use add_item_form::AddItemForm;
pub use dispatch_dialog::DispatchDialog;
pub use item_table::{ItemTable, SortConfig, SortDirection, SortKey, TableRow};
pub use low_stock_table::{low_stock_rows, LowStockRow, NO_LOW_STOCK_MESSAGE};
