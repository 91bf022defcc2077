//! Error types for catalog requests.

use thiserror::Error;

/// Message shown when the failure carries nothing presentable.
pub const GENERIC_FETCH_FAILURE: &str = "Failed to fetch movies";

/// Why a single listing request failed. `Display` is the user-facing text.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("API request failed with status {0}")]
    Status(u16),
    /// The API answered, but with a status other than `"ok"`.
    #[error("{}", api_message(.0))]
    Api(String),
    /// Connection, TLS or body transfer failure.
    #[error("Failed to fetch movies")]
    Transport(#[source] reqwest::Error),
    /// The body was not the expected JSON document.
    #[error("Failed to fetch movies")]
    Decode(#[source] serde_json::Error),
}

fn api_message(message: &str) -> &str {
    if message.trim().is_empty() {
        GENERIC_FETCH_FAILURE
    } else {
        message
    }
}

impl FetchError {
    /// Text for the error banner
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "API request failed with status 503"
        );
    }

    #[test]
    fn test_api_message_verbatim() {
        assert_eq!(
            FetchError::Api("Invalid page".to_string()).to_string(),
            "Invalid page"
        );
    }

    #[test]
    fn test_empty_api_message_falls_back() {
        assert_eq!(
            FetchError::Api("  ".to_string()).to_string(),
            GENERIC_FETCH_FAILURE
        );
    }

    #[test]
    fn test_decode_message_is_generic() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(FetchError::Decode(err).user_message(), GENERIC_FETCH_FAILURE);
    }
}
