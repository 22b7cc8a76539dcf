use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LogLevel, LoggingConfig, OAuthConfig, ProvisioningConfig, ServerConfig,
    SpawnerConfig, TENANT_ID_ENV, TlsConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub tls: TlsConfig,
    pub oauth: OAuthConfig,
    pub auth: AuthConfig,
    pub spawner: SpawnerConfig,
    pub provisioning: ProvisioningConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for HUB_CONFIG_DIR env var, else use ./.hub/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply HUB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: HUB_CONFIG_DIR env var > ./.hub/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.tls.validate()?;
        self.oauth.validate()?;
        self.auth.validate()?;
        self.spawner.validate()?;
        self.provisioning.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Identity claims file; relative names resolve inside the config dir.
    pub fn claims_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.auth.claims_file))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (hub_ip {}, api token {}, cors origins {:?})",
            self.server.host,
            self.server.port,
            self.server.hub_ip(),
            if self.server.api_token.is_some() {
                "set"
            } else {
                "unset"
            },
            self.server.cors_allowed_origins
        );

        match (&self.tls.ssl_cert, &self.tls.ssl_key) {
            (Some(cert), Some(key)) => info!("  tls: cert={cert}, key={key}"),
            _ => info!("  tls: disabled"),
        }

        info!(
            "  oauth: {} (client_id={}, tenant={}, callback={}, secret {})",
            if self.oauth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.oauth.client_id.as_deref().unwrap_or("-"),
            self.oauth.tenant_id.as_deref().unwrap_or("-"),
            self.oauth.oauth_callback_url.as_deref().unwrap_or("-"),
            if self.oauth.client_secret.is_some() {
                "set"
            } else {
                "unset"
            }
        );

        info!(
            "  auth: allow-list={} ({} seeded), admins={}, delete_invalid_users={}, claims={}",
            if self.auth.allowed_users.is_empty() {
                "disabled"
            } else {
                "enabled"
            },
            self.auth.allowed_users.len(),
            self.auth.admin_users.len(),
            self.auth.delete_invalid_users,
            self.auth.claims_file
        );

        info!(
            "  spawner: cmd={:?}, url={}, dir={}, timeouts={}s/{}s, env_keep={:?}",
            self.spawner.cmd,
            self.spawner.default_url,
            self.spawner.notebook_dir,
            self.spawner.http_timeout_secs,
            self.spawner.start_timeout_secs,
            self.spawner.env_keep
        );

        info!(
            "  provisioning: group={}, shared={}, home={}, sudo={}",
            self.provisioning.group,
            self.provisioning.shared_mount,
            self.provisioning.home_root,
            self.provisioning.use_sudo
        );

        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("HUB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("HUB_SERVER_PORT", &mut self.server.port);
        Self::apply_env_option_string("HUB_SERVER_HUB_IP", &mut self.server.hub_ip);
        Self::apply_env_option_string("HUB_SERVER_API_TOKEN", &mut self.server.api_token);
        Self::apply_env_list(
            "HUB_SERVER_CORS_ALLOWED_ORIGINS",
            &mut self.server.cors_allowed_origins,
        );

        // TLS
        Self::apply_env_option_string("HUB_TLS_SSL_CERT", &mut self.tls.ssl_cert);
        Self::apply_env_option_string("HUB_TLS_SSL_KEY", &mut self.tls.ssl_key);

        // OAuth
        Self::apply_env_bool("HUB_OAUTH_ENABLED", &mut self.oauth.enabled);
        Self::apply_env_option_string("HUB_OAUTH_CLIENT_ID", &mut self.oauth.client_id);
        Self::apply_env_option_string("HUB_OAUTH_CLIENT_SECRET", &mut self.oauth.client_secret);
        if self.oauth.tenant_id.is_none() {
            Self::apply_env_option_string(TENANT_ID_ENV, &mut self.oauth.tenant_id);
        }
        Self::apply_env_option_string("HUB_OAUTH_TENANT_ID", &mut self.oauth.tenant_id);
        Self::apply_env_option_string(
            "HUB_OAUTH_CALLBACK_URL",
            &mut self.oauth.oauth_callback_url,
        );

        // Auth
        Self::apply_env_list("HUB_AUTH_ALLOWED_USERS", &mut self.auth.allowed_users);
        Self::apply_env_list("HUB_AUTH_ADMIN_USERS", &mut self.auth.admin_users);
        Self::apply_env_bool(
            "HUB_AUTH_DELETE_INVALID_USERS",
            &mut self.auth.delete_invalid_users,
        );
        Self::apply_env_string("HUB_AUTH_CLAIMS_FILE", &mut self.auth.claims_file);

        // Spawner
        Self::apply_env_parse(
            "HUB_SPAWNER_HTTP_TIMEOUT_SECS",
            &mut self.spawner.http_timeout_secs,
        );
        Self::apply_env_parse(
            "HUB_SPAWNER_START_TIMEOUT_SECS",
            &mut self.spawner.start_timeout_secs,
        );

        // Provisioning
        Self::apply_env_string("HUB_PROVISIONING_GROUP", &mut self.provisioning.group);
        Self::apply_env_string(
            "HUB_PROVISIONING_SHARED_MOUNT",
            &mut self.provisioning.shared_mount,
        );
        Self::apply_env_string(
            "HUB_PROVISIONING_HOME_ROOT",
            &mut self.provisioning.home_root,
        );
        Self::apply_env_bool("HUB_PROVISIONING_USE_SUDO", &mut self.provisioning.use_sudo);

        // Logging
        if let Ok(level) = std::env::var("HUB_LOG_LEVEL") {
            self.logging.level = LogLevel::from(level.as_str());
        }
        Self::apply_env_bool("HUB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("HUB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply a comma-separated environment variable to a list
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
