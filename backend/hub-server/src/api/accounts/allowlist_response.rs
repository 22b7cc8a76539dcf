use serde::Serialize;

/// Snapshot of the allow-list and admin set
#[derive(Debug, Serialize)]
pub struct AllowlistResponse {
    /// False when no users were seeded; everyone is then allowed
    pub enabled: bool,
    pub allowed_users: Vec<String>,
    pub admin_users: Vec<String>,
}
