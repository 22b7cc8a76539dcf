use crate::{ConfigError, ConfigErrorResult, DEFAULT_OAUTH_ENABLED};

use serde::Deserialize;

/// Identity provider client registration.
///
/// The token exchange itself is performed by the gateway; these values are
/// validated here so a misconfigured deployment fails at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OAuthConfig {
    pub enabled: bool,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub tenant_id: Option<String>,
    pub oauth_callback_url: Option<String>,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_OAUTH_ENABLED,
            client_id: None,
            client_secret: None,
            tenant_id: None,
            oauth_callback_url: None,
        }
    }
}

impl OAuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if Self::is_blank(&self.client_id) {
            return Err(ConfigError::oauth(
                "oauth.client_id is required when oauth.enabled = true",
            ));
        }

        if Self::is_blank(&self.client_secret) {
            return Err(ConfigError::oauth(
                "oauth.client_secret is required when oauth.enabled = true",
            ));
        }

        if Self::is_blank(&self.tenant_id) {
            return Err(ConfigError::oauth(
                "oauth.tenant_id is required when oauth.enabled = true (or set AAD_TENANT_ID)",
            ));
        }

        match self.oauth_callback_url.as_deref() {
            Some(url) if url.starts_with("https://") || url.starts_with("http://") => Ok(()),
            Some(url) => Err(ConfigError::oauth(format!(
                "oauth.oauth_callback_url must be an http(s) URL, got '{url}'"
            ))),
            None => Err(ConfigError::oauth(
                "oauth.oauth_callback_url is required when oauth.enabled = true",
            )),
        }
    }

    fn is_blank(value: &Option<String>) -> bool {
        value.as_deref().is_none_or(|v| v.trim().is_empty())
    }
}
