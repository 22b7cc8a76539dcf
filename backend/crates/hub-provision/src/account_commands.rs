use crate::CommandSpec;

use hub_auth::LocalAccountName;
use hub_config::ProvisioningConfig;

use std::path::{Path, PathBuf};

const SUDO: &str = "sudo";

/// Builds the privileged command lines used to set up an account.
#[derive(Debug, Clone)]
pub struct AccountCommands {
    use_sudo: bool,
    group: String,
    shared_mount: PathBuf,
    home_root: PathBuf,
    notebooks_subdir: PathBuf,
    link_name: PathBuf,
}

impl AccountCommands {
    pub fn new(config: &ProvisioningConfig) -> Self {
        Self {
            use_sudo: config.use_sudo,
            group: config.group.clone(),
            shared_mount: PathBuf::from(&config.shared_mount),
            home_root: PathBuf::from(&config.home_root),
            notebooks_subdir: PathBuf::from(&config.notebooks_subdir),
            link_name: PathBuf::from(&config.link_name),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn shared_mount(&self) -> &Path {
        &self.shared_mount
    }

    pub fn home_dir(&self, name: &LocalAccountName) -> PathBuf {
        self.home_root.join(name.as_str())
    }

    /// `<home>/<notebooks>/<link>`
    pub fn notebooks_link_path(&self, name: &LocalAccountName) -> PathBuf {
        self.home_dir(name)
            .join(&self.notebooks_subdir)
            .join(&self.link_name)
    }

    /// `<home>/<link>`
    pub fn home_link_path(&self, name: &LocalAccountName) -> PathBuf {
        self.home_dir(name).join(&self.link_name)
    }

    /// `adduser -q --gecos "" --disabled-password <name>`
    pub fn create_account(&self, name: &LocalAccountName) -> CommandSpec {
        self.privileged(
            "adduser",
            ["-q", "--gecos", "", "--disabled-password", name.as_str()].map(String::from),
        )
    }

    /// `usermod -a -G <group> <name>`
    pub fn add_to_group(&self, name: &LocalAccountName) -> CommandSpec {
        self.privileged(
            "usermod",
            ["-a", "-G", self.group.as_str(), name.as_str()].map(String::from),
        )
    }

    pub fn link_notebooks_storage(&self, name: &LocalAccountName) -> CommandSpec {
        self.symlink(&self.notebooks_link_path(name))
    }

    pub fn link_home_storage(&self, name: &LocalAccountName) -> CommandSpec {
        self.symlink(&self.home_link_path(name))
    }

    fn symlink(&self, link: &Path) -> CommandSpec {
        self.privileged(
            "ln",
            [
                String::from("-s"),
                self.shared_mount.display().to_string(),
                link.display().to_string(),
            ],
        )
    }

    fn privileged<const N: usize>(&self, program: &str, args: [String; N]) -> CommandSpec {
        if self.use_sudo {
            CommandSpec::new(
                SUDO,
                std::iter::once(program.to_string()).chain(args),
            )
        } else {
            CommandSpec::new(program, args)
        }
    }
}
