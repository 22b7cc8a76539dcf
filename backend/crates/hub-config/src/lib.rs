mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod oauth_config;
mod provisioning_config;
mod server_config;
mod spawner_config;
mod tls_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use oauth_config::OAuthConfig;
pub use provisioning_config::ProvisioningConfig;
pub use server_config::ServerConfig;
pub use spawner_config::SpawnerConfig;
pub use tls_config::TlsConfig;

const CONFIG_DIR_ENV: &str = "HUB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".hub";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const MIN_API_TOKEN_LENGTH: usize = 32;

const DEFAULT_OAUTH_ENABLED: bool = false;
const TENANT_ID_ENV: &str = "AAD_TENANT_ID";

const DEFAULT_DELETE_INVALID_USERS: bool = true;
const DEFAULT_CLAIMS_FILE: &str = "claims.toml";

const DEFAULT_SPAWN_CMD: &str = "jupyterhub-singleuser";
const DEFAULT_SPAWN_URL: &str = "/lab";
const DEFAULT_NOTEBOOK_DIR: &str = "~/notebooks";
const DEFAULT_SPAWN_TIMEOUT_SECS: u64 = 300;
const MIN_SPAWN_TIMEOUT_SECS: u64 = 1;
const MAX_SPAWN_TIMEOUT_SECS: u64 = 3600;

const DEFAULT_GROUP: &str = "vmusers";
const DEFAULT_SHARED_MOUNT: &str = "/data/blobfuse";
const DEFAULT_HOME_ROOT: &str = "/home";
const DEFAULT_NOTEBOOKS_SUBDIR: &str = "notebooks";
const DEFAULT_LINK_NAME: &str = "data";
const DEFAULT_USE_SUDO: bool = true;
const MAX_GROUP_NAME_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
