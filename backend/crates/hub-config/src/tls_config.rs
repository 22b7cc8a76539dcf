use crate::{ConfigError, ConfigErrorResult};

use std::path::Path;

use serde::Deserialize;

/// Certificate and key served by the gateway. Issuance and renewal happen elsewhere.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TlsConfig {
    pub ssl_cert: Option<String>,
    pub ssl_key: Option<String>,
}

impl TlsConfig {
    pub fn enabled(&self) -> bool {
        self.ssl_cert.is_some() && self.ssl_key.is_some()
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        match (&self.ssl_cert, &self.ssl_key) {
            (Some(cert), Some(key)) => {
                Self::validate_path("tls.ssl_cert", cert)?;
                Self::validate_path("tls.ssl_key", key)
            }
            (None, None) => Ok(()),
            (Some(_), None) => Err(ConfigError::tls(
                "tls.ssl_key is required when tls.ssl_cert is set",
            )),
            (None, Some(_)) => Err(ConfigError::tls(
                "tls.ssl_cert is required when tls.ssl_key is set",
            )),
        }
    }

    fn validate_path(field: &str, value: &str) -> ConfigErrorResult<()> {
        if !Path::new(value).is_absolute() {
            return Err(ConfigError::tls(format!(
                "{field} must be an absolute path, got '{value}'"
            )));
        }
        Ok(())
    }
}
