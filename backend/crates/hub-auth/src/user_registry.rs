use crate::{AuthError, ClaimStore, LocalAccountName, Result as AuthErrorResult, canonical_identity};

use std::collections::HashSet;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info, warn};
use tokio::sync::RwLock;

/// Allow-list and admin set shared by every request handler.
///
/// The allow-list is enabled only when it was seeded with at least one name.
/// Admins are seeded once and never change at runtime.
pub struct UserRegistry {
    inner: Arc<RwLock<RegistryInner>>,
}

struct RegistryInner {
    allow_list_enabled: bool,
    allowed: HashSet<String>,
    admins: HashSet<String>,
    /// First identity seen for each account name
    claims: ClaimStore,
}

impl UserRegistry {
    /// Registry whose identity claims live only in memory.
    pub fn new<A, B>(allowed_users: A, admin_users: B) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self::with_claim_store(allowed_users, admin_users, ClaimStore::in_memory())
    }

    pub fn with_claim_store<A, B>(allowed_users: A, admin_users: B, claims: ClaimStore) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        let mut allowed: HashSet<String> = allowed_users.into_iter().map(Into::into).collect();
        let admins: HashSet<String> = admin_users.into_iter().map(Into::into).collect();
        let allow_list_enabled = !allowed.is_empty();

        if allow_list_enabled {
            allowed.extend(admins.iter().cloned());
        }

        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                allow_list_enabled,
                allowed,
                admins,
                claims,
            })),
        }
    }

    /// Registry with the allow-list disabled and no admins.
    pub fn open() -> Self {
        Self::new(Vec::<String>::new(), Vec::<String>::new())
    }

    /// Add a name to the allow-list. Returns true if the name was newly added;
    /// a disabled allow-list is left untouched.
    pub async fn register(&self, name: &LocalAccountName) -> bool {
        let mut inner = self.inner.write().await;

        if !inner.allow_list_enabled {
            debug!("Allow-list disabled, not registering {name}");
            return false;
        }

        let added = inner.allowed.insert(name.to_string());
        if added {
            info!(
                "Added {name} to allow-list ({} allowed)",
                inner.allowed.len()
            );
        }
        added
    }

    /// Record that `identity` owns `name`. A different identity resolving to
    /// the same name is rejected; identities differing only in case or
    /// spacing count as the same.
    pub async fn claim(&self, name: &LocalAccountName, identity: &str) -> AuthErrorResult<()> {
        let mut inner = self.inner.write().await;
        let owner = inner.claims.owner(name).map(str::to_string);

        match owner {
            Some(claimed_by) if canonical_identity(&claimed_by) == canonical_identity(identity) => {
                Ok(())
            }
            Some(claimed_by) => {
                warn!("Identity '{identity}' collides with '{claimed_by}' on account {name}");
                Err(AuthError::IdentityCollision {
                    identity: identity.to_string(),
                    name: name.to_string(),
                    claimed_by,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            None => {
                inner.claims.insert(name, identity)?;
                debug!("Account {name} claimed by '{identity}'");
                Ok(())
            }
        }
    }

    /// Forget claims on names that may no longer sign in, so they can be
    /// claimed afresh. Returns how many were dropped; a disabled allow-list
    /// drops nothing.
    pub async fn prune_claims(&self) -> AuthErrorResult<usize> {
        let mut inner = self.inner.write().await;

        if !inner.allow_list_enabled {
            return Ok(0);
        }

        let RegistryInner {
            allowed,
            admins,
            claims,
            ..
        } = &mut *inner;
        let dropped = claims.retain(|name| allowed.contains(name) || admins.contains(name))?;

        if dropped > 0 {
            info!("Dropped {dropped} identity claims for names off the allow-list");
        }
        Ok(dropped)
    }

    /// Whether `name` may sign in. Everyone may when the allow-list is disabled.
    pub async fn is_allowed(&self, name: &str) -> bool {
        let inner = self.inner.read().await;
        !inner.allow_list_enabled || inner.allowed.contains(name) || inner.admins.contains(name)
    }

    pub async fn is_admin(&self, name: &str) -> bool {
        let inner = self.inner.read().await;
        inner.admins.contains(name)
    }

    pub async fn allow_list_enabled(&self) -> bool {
        self.inner.read().await.allow_list_enabled
    }

    /// Sorted snapshot of the allow-list
    pub async fn allowed_users(&self) -> Vec<String> {
        let inner = self.inner.read().await;
        let mut names: Vec<String> = inner.allowed.iter().cloned().collect();
        names.sort();
        names
    }

    /// Sorted snapshot of the admin set
    pub async fn admin_users(&self) -> Vec<String> {
        let inner = self.inner.read().await;
        let mut names: Vec<String> = inner.admins.iter().cloned().collect();
        names.sort();
        names
    }
}

impl Clone for UserRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
