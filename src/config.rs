//! API Configuration
//!
//! Where the item list lives. Provided via Leptos Context API.

use leptos::prelude::*;

/// Backend location used when nothing is provided via context
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// `GET` target for the item list
    pub fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }
}

/// Get the API config from context, falling back to the default backend
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_default()
}
