//! Frontend Models
//!
//! Data structures matching the `/items` payload.

use serde::Deserialize;

/// Item data structure (matches backend list entries)
///
/// The backend sends more fields than these; serde skips the rest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub name: String,
    /// Stored as a float by the backend, so whole and fractional values both decode.
    pub quantity: f64,
}

impl Item {
    /// Quantity as shown in the table (`5` for `5.0`, `2.5` stays `2.5`)
    pub fn quantity_text(&self) -> String {
        self.quantity.to_string()
    }
}

#[cfg(test)]
impl Item {
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ignores_extra_fields() {
        let item: Item = serde_json::from_str(
            r#"{"id":7,"name":"Milk","quantity":1.5,"category_id":2,"date_added":"2024-01-01T00:00:00"}"#,
        )
        .unwrap();

        assert_eq!(item, Item::new("Milk", 1.5));
    }

    #[test]
    fn test_item_requires_name_and_quantity() {
        assert!(serde_json::from_str::<Item>(r#"{"name":"Milk"}"#).is_err());
        assert!(serde_json::from_str::<Item>(r#"{"quantity":3}"#).is_err());
        assert!(serde_json::from_str::<Item>(r#"{"name":"Milk","quantity":"3"}"#).is_err());
    }

    #[test]
    fn test_quantity_text() {
        assert_eq!(Item::new("Widget", 5.0).quantity_text(), "5");
        assert_eq!(Item::new("Flour", 2.5).quantity_text(), "2.5");
        assert_eq!(Item::new("Empty", 0.0).quantity_text(), "0");
    }
}
