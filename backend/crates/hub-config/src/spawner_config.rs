use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_NOTEBOOK_DIR, DEFAULT_SPAWN_CMD,
    DEFAULT_SPAWN_TIMEOUT_SECS, DEFAULT_SPAWN_URL, MAX_SPAWN_TIMEOUT_SECS, MIN_SPAWN_TIMEOUT_SECS,
};

use std::collections::BTreeMap;

use serde::Deserialize;

/// How the process supervisor launches a per-user notebook session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub cmd: Vec<String>,
    pub args: Vec<String>,
    pub default_url: String,
    /// Working directory; a leading `~` refers to the account's home
    pub notebook_dir: String,
    /// Gateway environment variables propagated into sessions
    pub env_keep: Vec<String>,
    /// Variables set explicitly in every session
    pub environment: BTreeMap<String, String>,
    pub http_timeout_secs: u64,
    pub start_timeout_secs: u64,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            cmd: vec![String::from(DEFAULT_SPAWN_CMD)],
            args: Vec::new(),
            default_url: String::from(DEFAULT_SPAWN_URL),
            notebook_dir: String::from(DEFAULT_NOTEBOOK_DIR),
            env_keep: Vec::new(),
            environment: BTreeMap::new(),
            http_timeout_secs: DEFAULT_SPAWN_TIMEOUT_SECS,
            start_timeout_secs: DEFAULT_SPAWN_TIMEOUT_SECS,
        }
    }
}

impl SpawnerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.cmd.first().is_none_or(|program| program.trim().is_empty()) {
            return Err(ConfigError::spawner("spawner.cmd cannot be empty"));
        }

        if !self.default_url.starts_with('/') {
            return Err(ConfigError::spawner(format!(
                "spawner.default_url must start with '/', got '{}'",
                self.default_url
            )));
        }

        for (field, value) in [
            ("spawner.http_timeout_secs", self.http_timeout_secs),
            ("spawner.start_timeout_secs", self.start_timeout_secs),
        ] {
            if !(MIN_SPAWN_TIMEOUT_SECS..=MAX_SPAWN_TIMEOUT_SECS).contains(&value) {
                return Err(ConfigError::spawner(format!(
                    "{field} must be {MIN_SPAWN_TIMEOUT_SECS}-{MAX_SPAWN_TIMEOUT_SECS}, got {value}"
                )));
            }
        }

        if let Some(key) = self
            .env_keep
            .iter()
            .chain(self.environment.keys())
            .find(|key| key.is_empty() || key.contains('='))
        {
            return Err(ConfigError::spawner(format!(
                "invalid environment variable name '{key}'"
            )));
        }

        Ok(())
    }
}
