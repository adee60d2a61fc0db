//! Configuration System
//!
//! Handles loading dashboard configuration from TOML and applying
//! key/value overrides. The browser build embeds a TOML file at compile
//! time and overrides it from `localStorage`; tests feed a map.

use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub refresh: RefreshConfig,

    #[serde(default)]
    pub pages: PageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend location
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Prefix for every `/api/...` path; empty means same origin
    #[serde(default)]
    pub base_url: String,

    /// Where to send the browser when the session is gone
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

fn default_login_path() -> String {
    "/".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            login_path: default_login_path(),
        }
    }
}

/// Refresh loop timing
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RefreshConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    #[serde(default = "default_post_submit_delay_secs")]
    pub post_submit_delay_secs: u64,
}

fn default_interval_secs() -> u64 {
    300 // 5 minutes
}

fn default_post_submit_delay_secs() -> u64 {
    5
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            post_submit_delay_secs: default_post_submit_delay_secs(),
        }
    }
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn post_submit_delay(&self) -> Duration {
        Duration::from_secs(self.post_submit_delay_secs)
    }
}

/// Page sizes and windows passed as query parameters
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PageConfig {
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,

    #[serde(default = "default_stats_days")]
    pub stats_days: u32,

    #[serde(default = "default_page")]
    pub journal_page: u32,

    #[serde(default = "default_page")]
    pub insights_page: u32,
}

fn default_history_limit() -> u32 {
    20
}

fn default_stats_days() -> u32 {
    7
}

fn default_page() -> u32 {
    5
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            stats_days: default_stats_days(),
            journal_page: default_page(),
            insights_page: default_page(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            error: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML and apply overrides in one step
    pub fn load_with_overrides<F>(content: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::from_toml_str(content)?;
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// Apply overrides from a key/value source.
    ///
    /// Recognized keys: `MINDI_API_BASE`, `MINDI_REFRESH_SECS`,
    /// `MINDI_SUBMIT_DELAY_SECS`, `MINDI_LOG_LEVEL`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup("MINDI_API_BASE") {
            self.api.base_url = base.trim_end_matches('/').to_string();
        }

        if let Some(secs) = lookup("MINDI_REFRESH_SECS") {
            let interval = parse_secs("MINDI_REFRESH_SECS", &secs)?;
            if interval == 0 {
                return Err(ConfigError::Override {
                    key: "MINDI_REFRESH_SECS".to_string(),
                    value: secs,
                });
            }
            self.refresh.interval_secs = interval;
        }
        if let Some(secs) = lookup("MINDI_SUBMIT_DELAY_SECS") {
            self.refresh.post_submit_delay_secs = parse_secs("MINDI_SUBMIT_DELAY_SECS", &secs)?;
        }

        if let Some(level) = lookup("MINDI_LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(())
    }

    /// Reject values that would spin the refresh timer or stall paging
    pub fn validate(&self) -> Result<(), ConfigError> {
        let nonzero = [
            ("refresh.interval_secs", self.refresh.interval_secs),
            ("pages.journal_page", u64::from(self.pages.journal_page)),
            ("pages.insights_page", u64::from(self.pages.insights_page)),
        ];

        match nonzero.iter().find(|(_, value)| *value == 0) {
            Some((key, _)) => Err(ConfigError::Invalid {
                key: key.to_string(),
                reason: "must be greater than zero".to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn parse_secs(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Override {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {error}")]
    Parse { error: String },

    #[error("Invalid override {key}={value:?}")]
    Override { key: String, value: String },

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Mindi Dashboard Configuration
#
# Overrides (read from localStorage in the browser):
# - MINDI_API_BASE
# - MINDI_REFRESH_SECS
# - MINDI_SUBMIT_DELAY_SECS
# - MINDI_LOG_LEVEL

[api]
# Prefix for /api/... requests; empty means same origin
base_url = ""

# Route the browser is sent to when a request returns 401
login_path = "/"

[refresh]
# Full dashboard refresh while the page stays open (seconds)
interval_secs = 300

# Delay between a successful submission and the follow-up refresh (seconds)
post_submit_delay_secs = 5

[pages]
# Mood entries requested for the analytics chart
history_limit = 20

# Window for mood statistics (days)
stats_days = 7

# Page sizes for "load more" on journal entries and insights
journal_page = 5
insights_page = 5

[logging]
# Log level: trace, debug, info, warn, error
level = "info"
"#
    .to_string()
}
