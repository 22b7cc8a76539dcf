use crate::{AuthError, Result as AuthErrorResult, normalize};

use std::fmt;
use std::ops::Deref;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// A normalized name that is safe to hand to account management commands
/// and to join onto the home root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LocalAccountName(String);

impl LocalAccountName {
    /// Normalize an upstream identity and validate the result.
    #[track_caller]
    pub fn from_identity(identity: &str) -> AuthErrorResult<Self> {
        let name = normalize(identity);

        let problem = if name.is_empty() {
            Some("normalizes to an empty account name")
        } else if name.starts_with('-') {
            Some("account name cannot start with '-'")
        } else if name.contains(['/', ':', '\0']) {
            Some("account name cannot contain '/', ':' or NUL")
        } else {
            None
        };

        match problem {
            Some(message) => Err(AuthError::InvalidUsername {
                identity: identity.to_string(),
                message: message.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for LocalAccountName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for LocalAccountName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocalAccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
