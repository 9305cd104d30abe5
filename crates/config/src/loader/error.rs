//! Error types for configuration loading.

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// The base URL is missing or not a valid http(s) URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A numeric setting is outside its allowed range.
    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),
}
