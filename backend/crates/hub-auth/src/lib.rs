pub mod claim_store;
pub mod error;
pub mod local_account_name;
pub mod normalize;
pub mod user_registry;

pub use claim_store::ClaimStore;
pub use error::{AuthError, Result};
pub use local_account_name::LocalAccountName;
pub use normalize::{canonical_identity, normalize};
pub use user_registry::UserRegistry;

/// Longest local account name produced by normalization
pub const MAX_ACCOUNT_NAME_LENGTH: usize = 32;
