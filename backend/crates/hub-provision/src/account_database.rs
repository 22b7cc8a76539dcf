use crate::{ProvisionError, Result as ProvisionErrorResult};

use hub_auth::LocalAccountName;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Exact-name lookup in the host's user database.
#[async_trait]
pub trait AccountDatabase: Send + Sync {
    async fn exists(&self, name: &LocalAccountName) -> ProvisionErrorResult<bool>;
}

/// Looks accounts up through NSS (`getpwnam_r`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAccountDatabase;

#[async_trait]
impl AccountDatabase for SystemAccountDatabase {
    async fn exists(&self, name: &LocalAccountName) -> ProvisionErrorResult<bool> {
        let lookup_name = name.to_string();

        // NSS may be backed by a directory service, keep it off the runtime threads.
        let result =
            tokio::task::spawn_blocking(move || nix::unistd::User::from_name(&lookup_name)).await;

        match result {
            Ok(Ok(user)) => Ok(user.is_some()),
            Ok(Err(errno)) => Err(ProvisionError::AccountLookup {
                name: name.to_string(),
                message: errno.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(join_error) => Err(ProvisionError::AccountLookup {
                name: name.to_string(),
                message: join_error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
