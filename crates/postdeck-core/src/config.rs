//! Browser configuration

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::paginate::DEFAULT_PAGE_SIZE;

/// Default collection endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/posts";

/// Browser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Collection endpoint URL
    pub endpoint: String,

    /// Number of posts per page
    pub page_size: usize,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE.get(),
        }
    }
}

impl BrowserConfig {
    /// Load configuration from file.
    ///
    /// With no explicit path the platform config directory is used. A missing
    /// file yields the defaults.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let config: BrowserConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the browser cannot work with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint must not be empty".into()));
        }
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".into()));
        }
        Ok(())
    }

    /// Page size as a non-zero value
    pub fn page_size(&self) -> ConfigResult<NonZeroUsize> {
        NonZeroUsize::new(self.page_size)
            .ok_or_else(|| ConfigError::Invalid("page_size must be at least 1".into()))
    }

    /// `<config_dir>/postdeck/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("postdeck").join("config.toml"))
    }
}
