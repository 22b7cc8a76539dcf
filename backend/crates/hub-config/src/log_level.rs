use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_LEVEL};

use std::fmt;

use log::LevelFilter;
use serde::Deserialize;

/// `logging.level` as written in `config.toml` or `HUB_LOG_LEVEL`.
///
/// Kept as text until [`LogLevel::filter`] so a typo is reported by
/// `Config::validate()` instead of being replaced by a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(String);

impl LogLevel {
    /// Parse the level; names are case-insensitive.
    #[track_caller]
    pub fn filter(&self) -> ConfigErrorResult<LevelFilter> {
        self.0.trim().parse().map_err(|_| {
            ConfigError::logging(format!(
                "logging.level must be one of off, error, warn, info, debug, trace, got '{}'",
                self.0
            ))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self(String::from(DEFAULT_LOG_LEVEL))
    }
}

impl From<&str> for LogLevel {
    fn from(level: &str) -> Self {
        Self(level.to_string())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
