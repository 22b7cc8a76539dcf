use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Username as returned by the identity provider
    pub username: String,
}
