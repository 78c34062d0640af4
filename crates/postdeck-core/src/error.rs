//! Error types for loading and configuration

use thiserror::Error;

/// Errors raised while fetching the post collection.
///
/// The load state machine does not distinguish between these: every variant
/// ends up as `LoadState::Failed` carrying the rendered message.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Body was not a valid posts document
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Body parsed but carried no `posts` field
    #[error("malformed response: missing `posts` field")]
    MissingPosts,

    /// Failure reported by a non-HTTP source
    #[error("source error: {0}")]
    Source(String),
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        let err = FetchError::Status {
            status: 503,
            body: "unavailable".into(),
        };
        assert_eq!(err.to_string(), "unexpected status 503: unavailable");
        assert_eq!(
            FetchError::MissingPosts.to_string(),
            "malformed response: missing `posts` field"
        );
    }

    #[test]
    fn test_decode_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(err.to_string().starts_with("malformed response:"));
    }
}
