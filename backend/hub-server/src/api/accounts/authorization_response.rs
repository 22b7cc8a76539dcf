use serde::Serialize;

/// Whether a local account may sign in, and with which privileges
#[derive(Debug, Serialize)]
pub struct AuthorizationResponse {
    pub name: String,
    pub allowed: bool,
    pub admin: bool,
}
