//! Item API
//!
//! Frontend binding to the backend's `GET /items` endpoint.

use gloo_net::http::Request;

use crate::config::ApiConfig;
use crate::error::LoadError;
use crate::models::Item;

// ========================
// Source
// ========================

/// Anything that can produce the item list
#[allow(async_fn_in_trait)]
pub trait ItemSource {
    async fn list_items(&self) -> Result<Vec<Item>, LoadError>;
}

/// Browser source: one HTTP request per call
#[derive(Debug, Clone)]
pub struct HttpItemSource {
    config: ApiConfig,
}

impl HttpItemSource {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl ItemSource for HttpItemSource {
    async fn list_items(&self) -> Result<Vec<Item>, LoadError> {
        fetch_items(&self.config).await
    }
}

// ========================
// Requests
// ========================

/// Plain `GET` with no headers, query or body
pub async fn fetch_items(config: &ApiConfig) -> Result<Vec<Item>, LoadError> {
    let url = config.items_url();
    log::debug!("GET {}", url);

    let response = Request::get(&url).send().await?;
    let status = response.status();
    let body = response.text().await?;
    decode_items(status, &body)
}

/// Classify a response: anything but a 2xx carrying a JSON array of items fails
pub fn decode_items(status: u16, body: &str) -> Result<Vec<Item>, LoadError> {
    if !(200..300).contains(&status) {
        return Err(LoadError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| LoadError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_two_items_in_order() {
        let items = decode_items(
            200,
            r#"[{"name":"Widget","quantity":5},{"name":"Gadget","quantity":2}]"#,
        )
        .unwrap();

        assert_eq!(items, vec![Item::new("Widget", 5.0), Item::new("Gadget", 2.0)]);
    }

    #[test]
    fn test_decode_empty_array() {
        assert_eq!(decode_items(200, "[]").unwrap(), Vec::<Item>::new());
    }

    #[test]
    fn test_non_success_status_fails_before_parsing() {
        assert_eq!(decode_items(500, "[]"), Err(LoadError::Status(500)));
        assert_eq!(decode_items(404, "not found"), Err(LoadError::Status(404)));
        assert_eq!(decode_items(199, "[]"), Err(LoadError::Status(199)));
    }

    #[test]
    fn test_other_success_codes_accepted() {
        assert!(decode_items(203, "[]").is_ok());
    }

    #[test]
    fn test_object_envelope_is_decode_error() {
        let result = decode_items(200, r#"{"items":[{"name":"Widget","quantity":5}]}"#);
        assert!(matches!(result, Err(LoadError::Decode(_))));
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        assert!(matches!(decode_items(200, "[{"), Err(LoadError::Decode(_))));
        assert!(matches!(decode_items(200, ""), Err(LoadError::Decode(_))));
        assert!(matches!(
            decode_items(200, r#"[{"name":"Widget"}]"#),
            Err(LoadError::Decode(_))
        ));
    }
}
