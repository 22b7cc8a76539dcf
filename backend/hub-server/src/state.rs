use hub_config::{ServerConfig, SpawnerConfig};
use hub_provision::AccountProvisioner;

use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub provisioner: Arc<AccountProvisioner>,
    pub spawner: Arc<SpawnerConfig>,
    /// Bearer token required on `/api/*`; `None` rejects every API call
    pub api_token: Option<Arc<str>>,
    pub cors_allowed_origins: Arc<[String]>,
}

impl AppState {
    pub fn new(
        provisioner: AccountProvisioner,
        spawner: SpawnerConfig,
        server: &ServerConfig,
    ) -> Self {
        Self {
            provisioner: Arc::new(provisioner),
            spawner: Arc::new(spawner),
            api_token: server.api_token.as_deref().map(Arc::from),
            cors_allowed_origins: server.cors_allowed_origins.clone().into(),
        }
    }
}
