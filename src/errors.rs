//! Crate-wide error types

use thiserror::Error;

/// Errors that can occur while syncing or acting against the Stocker server
#[derive(Error, Debug)]
pub enum Error {
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned status {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("json parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("invalid currency text: {0:?}")]
    CurrencyParse(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type for sync operations
pub type Result<T> = std::result::Result<T, Error>;
