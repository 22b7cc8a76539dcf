use crate::{ConfigError, ConfigErrorResult, DEFAULT_CLAIMS_FILE, DEFAULT_DELETE_INVALID_USERS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Seed for the allow-list. Empty disables the allow-list entirely.
    pub allowed_users: Vec<String>,
    /// Seed for the admin set; admins are implicitly allowed.
    pub admin_users: Vec<String>,
    /// Drop stored identity claims of names no longer allowed at startup.
    pub delete_invalid_users: bool,
    /// Which identity owns each account name, kept across restarts
    pub claims_file: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            allowed_users: Vec::new(),
            admin_users: Vec::new(),
            delete_invalid_users: DEFAULT_DELETE_INVALID_USERS,
            claims_file: String::from(DEFAULT_CLAIMS_FILE),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (field, names) in [
            ("auth.allowed_users", &self.allowed_users),
            ("auth.admin_users", &self.admin_users),
        ] {
            if names.iter().any(|name| name.trim().is_empty()) {
                return Err(ConfigError::auth(format!(
                    "{field} cannot contain empty names"
                )));
            }
        }

        if self.claims_file.trim().is_empty() {
            return Err(ConfigError::auth("auth.claims_file cannot be empty"));
        }

        Ok(())
    }
}
