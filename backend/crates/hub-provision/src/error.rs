use hub_auth::AuthError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Account lookup for '{name}' failed: {message} {location}")]
    AccountLookup {
        name: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to run '{program}': {source} {location}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Creating account '{name}' failed: {diagnostic} {location}")]
    AccountCreation {
        name: String,
        diagnostic: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
