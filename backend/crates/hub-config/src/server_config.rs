use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, MIN_API_TOKEN_LENGTH, MIN_PORT,
};

use std::net::IpAddr;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Address the gateway's internal hub binds to (defaults to `host`)
    pub hub_ip: Option<String>,
    /// Bearer token the gateway presents on `/api/*` calls. Without one the
    /// account API rejects every request.
    pub api_token: Option<String>,
    /// Browser origins allowed by CORS; empty allows none
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            hub_ip: None,
            api_token: None,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign" - OS picks an available port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host cannot be empty"));
        }

        if let Some(ref hub_ip) = self.hub_ip
            && hub_ip.parse::<IpAddr>().is_err()
        {
            return Err(ConfigError::server(format!(
                "server.hub_ip must be an IP address, got '{hub_ip}'"
            )));
        }

        match self.api_token {
            Some(ref token) if token.len() < MIN_API_TOKEN_LENGTH => {
                return Err(ConfigError::server(format!(
                    "server.api_token must be at least {MIN_API_TOKEN_LENGTH} characters"
                )));
            }
            None if !self.is_loopback() => {
                return Err(ConfigError::server(format!(
                    "server.api_token is required when binding to non-loopback host '{}'",
                    self.host
                )));
            }
            _ => {}
        }

        if let Some(origin) = self
            .cors_allowed_origins
            .iter()
            .find(|origin| !origin.starts_with("http://") && !origin.starts_with("https://"))
        {
            return Err(ConfigError::server(format!(
                "server.cors_allowed_origins entries must be http(s) origins, got '{origin}'"
            )));
        }

        Ok(())
    }

    /// The hub address, falling back to the bind host.
    pub fn hub_ip(&self) -> &str {
        self.hub_ip.as_deref().unwrap_or(&self.host)
    }

    /// True when only local processes can reach the listener.
    pub fn is_loopback(&self) -> bool {
        self.host == "localhost"
            || self
                .host
                .parse::<IpAddr>()
                .is_ok_and(|addr| addr.is_loopback())
    }
}
