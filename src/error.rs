//! Load Errors

use thiserror::Error;

/// Why the item list could not be loaded.
///
/// The view treats every variant the same way; the detail only ends up in the log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("response body is not an item list: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for LoadError {
    fn from(err: gloo_net::Error) -> Self {
        LoadError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            LoadError::Status(500).to_string(),
            "server responded with status 500"
        );
        assert_eq!(
            LoadError::Network("connection refused".into()).to_string(),
            "request failed: connection refused"
        );
    }
}
