use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GROUP, DEFAULT_HOME_ROOT, DEFAULT_LINK_NAME,
    DEFAULT_NOTEBOOKS_SUBDIR, DEFAULT_SHARED_MOUNT, DEFAULT_USE_SUDO, MAX_GROUP_NAME_LENGTH,
};

use std::path::Path;

use serde::Deserialize;

/// Local account provisioning: group grant and shared storage layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProvisioningConfig {
    pub group: String,
    pub shared_mount: String,
    pub home_root: String,
    pub notebooks_subdir: String,
    pub link_name: String,
    /// Prefix every account command with `sudo`
    pub use_sudo: bool,
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self {
            group: String::from(DEFAULT_GROUP),
            shared_mount: String::from(DEFAULT_SHARED_MOUNT),
            home_root: String::from(DEFAULT_HOME_ROOT),
            notebooks_subdir: String::from(DEFAULT_NOTEBOOKS_SUBDIR),
            link_name: String::from(DEFAULT_LINK_NAME),
            use_sudo: DEFAULT_USE_SUDO,
        }
    }
}

impl ProvisioningConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let group_is_valid = !self.group.is_empty()
            && self.group.len() <= MAX_GROUP_NAME_LENGTH
            && !self.group.starts_with('-')
            && self
                .group
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !group_is_valid {
            return Err(ConfigError::provisioning(format!(
                "provisioning.group must be 1-{} characters of [A-Za-z0-9_-], got '{}'",
                MAX_GROUP_NAME_LENGTH, self.group
            )));
        }

        for (field, value) in [
            ("provisioning.shared_mount", &self.shared_mount),
            ("provisioning.home_root", &self.home_root),
        ] {
            if !Path::new(value).is_absolute() {
                return Err(ConfigError::provisioning(format!(
                    "{field} must be an absolute path, got '{value}'"
                )));
            }
        }

        for (field, value) in [
            ("provisioning.notebooks_subdir", &self.notebooks_subdir),
            ("provisioning.link_name", &self.link_name),
        ] {
            if value.is_empty() || value.contains("..") || Path::new(value).is_absolute() {
                return Err(ConfigError::provisioning(format!(
                    "{field} must be a relative path without '..', got '{value}'"
                )));
            }
        }

        Ok(())
    }
}
