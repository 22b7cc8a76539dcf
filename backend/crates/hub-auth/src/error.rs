use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid username '{identity}': {message} {location}")]
    InvalidUsername {
        identity: String,
        message: String,
        location: ErrorLocation,
    },

    #[error(
        "Identity '{identity}' resolves to account '{name}', already claimed by '{claimed_by}' {location}"
    )]
    IdentityCollision {
        identity: String,
        name: String,
        claimed_by: String,
        location: ErrorLocation,
    },

    #[error("Identity claims file {path}: {message} {location}")]
    ClaimStore {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidUsername { .. } => "INVALID_USERNAME",
            Self::IdentityCollision { .. } => "IDENTITY_COLLISION",
            Self::ClaimStore { .. } => "CLAIM_STORE",
        }
    }

    #[track_caller]
    pub(crate) fn claim_store(path: &Path, message: String) -> Self {
        AuthError::ClaimStore {
            path: path.to_path_buf(),
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
