
use crate::{
    AccountDatabase, AccountProvisioner, CommandOutcome, CommandRunner, CommandSpec,
    ProvisionError, Result as ProvisionErrorResult,
};

use hub_auth::{LocalAccountName, UserRegistry};
use hub_config::ProvisioningConfig;

use std::collections::HashSet;
use std::panic::Location;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;

/// In-memory user database shared with the fake runner.
#[derive(Clone, Default)]
pub(crate) struct FakeAccounts {
    names: Arc<Mutex<HashSet<String>>>,
}

impl FakeAccounts {
    pub(crate) fn with(names: &[&str]) -> Self {
        let accounts = Self::default();
        for name in names {
            accounts.insert(name);
        }
        accounts
    }

    pub(crate) fn insert(&self, name: &str) {
        self.names.lock().unwrap().insert(name.to_string());
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.names.lock().unwrap().contains(name)
    }
}

#[async_trait]
impl AccountDatabase for FakeAccounts {
    async fn exists(&self, name: &LocalAccountName) -> ProvisionErrorResult<bool> {
        Ok(self.contains(name))
    }
}

/// Records every command; `adduser` creates the account in [`FakeAccounts`].
#[derive(Clone)]
pub(crate) struct FakeRunner {
    accounts: FakeAccounts,
    history: Arc<Mutex<Vec<CommandSpec>>>,
    /// Commands whose rendered form contains one of these fail with status 1
    failing: Arc<Mutex<Vec<String>>>,
    /// Commands whose rendered form contains one of these cannot be spawned
    unspawnable: Arc<Mutex<Vec<String>>>,
    delay: Duration,
}

impl FakeRunner {
    pub(crate) fn new(accounts: FakeAccounts) -> Self {
        Self {
            accounts,
            history: Arc::default(),
            failing: Arc::default(),
            unspawnable: Arc::default(),
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn fail_when(self, fragment: &str) -> Self {
        self.failing.lock().unwrap().push(fragment.to_string());
        self
    }

    pub(crate) fn unspawnable_when(self, fragment: &str) -> Self {
        self.unspawnable.lock().unwrap().push(fragment.to_string());
        self
    }

    pub(crate) fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    pub(crate) fn count_containing(&self, fragment: &str) -> usize {
        self.history()
            .iter()
            .filter(|line| line.contains(fragment))
            .count()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, command: &CommandSpec) -> ProvisionErrorResult<CommandOutcome> {
        let rendered = command.to_string();
        self.history.lock().unwrap().push(command.clone());

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let unspawnable = self
            .unspawnable
            .lock()
            .unwrap()
            .iter()
            .any(|fragment| rendered.contains(fragment));
        if unspawnable {
            return Err(ProvisionError::Spawn {
                program: command.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let fails = self
            .failing
            .lock()
            .unwrap()
            .iter()
            .any(|fragment| rendered.contains(fragment));
        if fails {
            return Ok(CommandOutcome::failure(1, "simulated failure"));
        }

        if rendered.contains("adduser")
            && let Some(name) = command.args.last()
        {
            self.accounts.insert(name);
        }

        Ok(CommandOutcome::success())
    }
}

pub(crate) fn provisioner(
    accounts: &FakeAccounts,
    runner: &FakeRunner,
    registry: UserRegistry,
) -> AccountProvisioner {
    AccountProvisioner::new(
        &ProvisioningConfig::default(),
        Arc::new(accounts.clone()),
        Arc::new(runner.clone()),
        registry,
    )
}

pub(crate) fn account(identity: &str) -> LocalAccountName {
    LocalAccountName::from_identity(identity).unwrap()
}
