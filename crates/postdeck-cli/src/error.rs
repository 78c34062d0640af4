//! CLI error types

use postdeck_core::{ConfigError, FetchError};
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP client setup error
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Posts could not be loaded
    #[error("Failed to load posts: {0}")]
    LoadFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
