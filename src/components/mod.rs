//! UI Components
//!
//! Leptos components for the inventory page.

mod delete_confirm_button;
mod sort_header;
mod inventory_table;
mod out_of_stock_table;
mod item_modal;
mod toolbar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use sort_header::SortHeader;
pub use inventory_table::InventoryTable;
pub use out_of_stock_table::OutOfStockTable;
pub use item_modal::ItemModal;
pub use toolbar::Toolbar;
