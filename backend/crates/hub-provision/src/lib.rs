//! Local account provisioning for users who sign in through the gateway.
//!
//! Linux only: accounts are created with `adduser`, grouped with `usermod`
//! and given links into the shared data mount with `ln`.

pub mod account_commands;
pub mod account_database;
pub mod account_status;
pub mod command;
pub mod error;
pub mod identity_locks;
pub mod provisioner;
pub mod spawn_plan;
pub mod step_outcome;

pub use account_commands::AccountCommands;
pub use account_database::{AccountDatabase, SystemAccountDatabase};
pub use account_status::{AccountStatus, ProvisionOutcome, ProvisionReport};
pub use command::{CommandOutcome, CommandRunner, CommandSpec, SystemCommandRunner};
pub use error::{ProvisionError, Result};
pub use identity_locks::IdentityLocks;
pub use provisioner::AccountProvisioner;
pub use spawn_plan::SpawnPlan;
pub use step_outcome::{LinkReport, StepOutcome};

#[cfg(test)]
mod tests;
