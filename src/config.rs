//! Runtime configuration.
//!
//! Use the builder pattern to customize, or [`AppConfig::from_env`] to pick
//! up environment overrides:
//!
//! ```
//! use postdash::config::AppConfig;
//! use std::time::Duration;
//!
//! let config = AppConfig::default()
//!     .with_api_base_url("http://localhost:3000")
//!     .with_tick_rate(Duration::from_millis(50));
//! assert_eq!(config.api_base_url, "http://localhost:3000");
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::api::API_BASE_URL;

/// Overrides the API base URL (local mirrors and tests)
pub const ENV_API_URL: &str = "POSTDASH_API_URL";
/// `EnvFilter` directives for the log file
pub const ENV_LOG: &str = "POSTDASH_LOG";

const DEFAULT_TICK_MS: u64 = 100;
const DEFAULT_LOG_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "postdash.log";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the posts/users API
    pub api_base_url: String,
    /// UI tick interval (spinner animation)
    pub tick_rate: Duration,
    /// Log filter directives (default: info)
    pub log_filter: String,
    /// Log file path; `None` disables file logging
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Defaults overridden by `POSTDASH_API_URL` and `POSTDASH_LOG`.
    ///
    /// Empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = non_empty_var(ENV_API_URL) {
            config = config.with_api_base_url(url);
        }
        if let Some(filter) = non_empty_var(ENV_LOG) {
            config = config.with_log_filter(filter);
        }
        config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `<cache dir>/postdash/postdash.log`, if the platform has a cache dir.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("postdash").join(LOG_FILE_NAME))
}
