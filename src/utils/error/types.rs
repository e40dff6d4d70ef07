//! Core error type definitions

use crate::normalize::NormalizeError;
use thiserror::Error;

/// Result type alias for the plugin
pub type Result<T> = std::result::Result<T, ProxyError>;

/// Main error type for the plugin
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed inbound request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Reshaping or translating a JSON document failed
    #[error("Normalization error: {0}")]
    Normalization(#[from] NormalizeError),

    /// Upstream could not be reached or answered in a way we cannot interpret
    #[error("{0}")]
    Upstream(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
