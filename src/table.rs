//! Table Utilities
//!
//! Helper functions for table rendering.

use crate::models::Item;

/// Header cells, in column order
pub const COLUMNS: [&str; 2] = ["Name", "Quantity"];

/// One body row of the item table
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Position in the current list. Not an identity: it changes whenever the list does.
    pub index: usize,
    pub name: String,
    pub quantity: String,
}

/// Project items into display rows, keeping source order
pub fn table_rows(items: &[Item]) -> Vec<TableRow> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| TableRow {
            index,
            name: item.name.clone(),
            quantity: item.quantity_text(),
        })
        .collect()
}
