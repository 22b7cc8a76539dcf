use crate::{
    AccountCommands, AccountDatabase, AccountStatus, CommandRunner, CommandSpec, IdentityLocks,
    LinkReport, ProvisionError, ProvisionOutcome, ProvisionReport, Result as ProvisionErrorResult,
    StepOutcome,
};

use hub_auth::{LocalAccountName, UserRegistry};
use hub_config::ProvisioningConfig;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, error, info, warn};

/// Makes sure every authenticated identity has a local account.
///
/// Per account name the flow is: check existence, then either stop (the
/// account already exists) or create it, grant the group and link shared
/// storage. The group and storage steps are best-effort: failures are logged
/// and reported but never abort the flow. Finally the name is registered on
/// the allow-list.
pub struct AccountProvisioner {
    commands: AccountCommands,
    accounts: Arc<dyn AccountDatabase>,
    runner: Arc<dyn CommandRunner>,
    registry: UserRegistry,
    locks: IdentityLocks,
}

impl AccountProvisioner {
    pub fn new(
        config: &ProvisioningConfig,
        accounts: Arc<dyn AccountDatabase>,
        runner: Arc<dyn CommandRunner>,
        registry: UserRegistry,
    ) -> Self {
        Self {
            commands: AccountCommands::new(config),
            accounts,
            runner,
            registry,
            locks: IdentityLocks::new(),
        }
    }

    pub fn registry(&self) -> &UserRegistry {
        &self.registry
    }

    pub fn commands(&self) -> &AccountCommands {
        &self.commands
    }

    /// Entry point for the login flow: provision the account behind an
    /// upstream identity and register it.
    pub async fn add_user(&self, identity: &str) -> ProvisionErrorResult<ProvisionOutcome> {
        let name = LocalAccountName::from_identity(identity)?;
        debug!("Identity '{identity}' resolved to account {name}");

        self.registry.claim(&name, identity).await?;

        let status = self.ensure_account(&name).await?;
        self.register_in_allowlist(&name).await;

        let allowed = self.registry.is_allowed(&name).await;
        let admin = self.registry.is_admin(&name).await;

        Ok(ProvisionOutcome {
            name,
            status,
            allowed,
            admin,
        })
    }

    /// Create the account unless it already exists.
    ///
    /// Serialized per name, so concurrent logins of one user issue at most
    /// one creation command.
    pub async fn ensure_account(
        &self,
        name: &LocalAccountName,
    ) -> ProvisionErrorResult<AccountStatus> {
        let _guard = self.locks.lock(name).await;

        info!("Checking local account {name}");
        if self.accounts.exists(name).await? {
            info!("Account {name} already exists");
            return Ok(AccountStatus::AlreadyExists);
        }

        self.create_account(name).await?;

        let group = self.grant_group_membership(name).await;
        let storage = self.link_shared_storage(name).await;

        info!(
            "Finished creating local account {name} (group: {}, storage: {})",
            if group.is_success() { "ok" } else { "failed" },
            if storage.all_succeeded() {
                "ok"
            } else {
                "failed"
            }
        );

        Ok(AccountStatus::Provisioned(ProvisionReport { group, storage }))
    }

    /// Add the account to the configured group.
    pub async fn grant_group_membership(&self, name: &LocalAccountName) -> StepOutcome {
        info!("Adding {name} to group {}", self.commands.group());
        self.run_step(self.commands.add_to_group(name)).await
    }

    /// Link the shared mount into the notebooks directory and the home
    /// directory. The second link is attempted even when the first fails.
    pub async fn link_shared_storage(&self, name: &LocalAccountName) -> LinkReport {
        info!(
            "Linking {} into home of {name}",
            self.commands.shared_mount().display()
        );

        let notebooks_link = self
            .run_step(self.commands.link_notebooks_storage(name))
            .await;
        let home_link = self.run_step(self.commands.link_home_storage(name)).await;

        LinkReport {
            notebooks_link,
            home_link,
        }
    }

    pub async fn register_in_allowlist(&self, name: &LocalAccountName) {
        self.registry.register(name).await;
    }

    async fn create_account(&self, name: &LocalAccountName) -> ProvisionErrorResult<()> {
        let command = self.commands.create_account(name);
        info!("Creating local account {name}");

        let outcome = self.runner.run(&command).await?;
        if !outcome.succeeded() {
            let diagnostic = outcome.diagnostic();
            error!("`{command}` failed: {diagnostic}");
            return Err(ProvisionError::AccountCreation {
                name: name.to_string(),
                diagnostic,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    async fn run_step(&self, command: CommandSpec) -> StepOutcome {
        match self.runner.run(&command).await {
            Ok(outcome) if outcome.succeeded() => StepOutcome::Succeeded,
            Ok(outcome) => {
                let diagnostic = outcome.diagnostic();
                warn!("`{command}` failed: {diagnostic}");
                StepOutcome::Failed { diagnostic }
            }
            Err(e) => {
                warn!("`{command}` could not be run: {e}");
                StepOutcome::Failed {
                    diagnostic: e.to_string(),
                }
            }
        }
    }
}
