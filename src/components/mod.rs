//! UI Components
//!
//! Leptos components for the item list page.

mod item_table;
mod add_item_button;

pub use item_table::ItemTable;
pub use add_item_button::AddItemButton;
