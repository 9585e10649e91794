// src/error.rs

//! Unified error handling for the downloader application.

use thiserror::Error;

/// Result type alias for downloader operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// Errors are surfaced to the user with the underlying failure's message;
/// nothing is translated into a separate domain taxonomy.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Server answered with a non-success status code
    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
