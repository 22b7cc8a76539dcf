use crate::api::extractors::api_caller::tokens_match;
use crate::{ApiCaller, ApiError, AppState};

use hub_auth::UserRegistry;
use hub_config::{ProvisioningConfig, ServerConfig, SpawnerConfig};
use hub_provision::{AccountProvisioner, SystemAccountDatabase, SystemCommandRunner};

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};

const TOKEN: &str = "0123456789abcdef0123456789abcdef";

fn create_test_state(api_token: Option<&str>) -> AppState {
    let provisioner = AccountProvisioner::new(
        &ProvisioningConfig::default(),
        Arc::new(SystemAccountDatabase),
        Arc::new(SystemCommandRunner),
        UserRegistry::new(Vec::<String>::new(), Vec::<String>::new()),
    );
    let server = ServerConfig {
        api_token: api_token.map(String::from),
        ..ServerConfig::default()
    };
    AppState::new(provisioner, SpawnerConfig::default(), &server)
}

async fn extract(state: &AppState, authorization: Option<&str>) -> Result<ApiCaller, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();
    ApiCaller::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_extractor_accepts_matching_bearer_token() {
    let state = create_test_state(Some(TOKEN));

    let result = extract(&state, Some(&format!("Bearer {TOKEN}"))).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let state = create_test_state(Some(TOKEN));

    let result = extract(&state, None).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized { ref message, .. }) if message == "Missing bearer token"
    ));
}

#[tokio::test]
async fn test_extractor_rejects_token_with_extra_suffix() {
    let state = create_test_state(Some(TOKEN));

    let result = extract(&state, Some(&format!("Bearer {TOKEN}x"))).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized { ref message, .. }) if message == "Invalid API token"
    ));
}

#[tokio::test]
async fn test_extractor_rejects_everything_without_configured_token() {
    let state = create_test_state(None);

    let result = extract(&state, Some("Bearer ")).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_tokens_match_requires_equal_length_and_bytes() {
    assert!(tokens_match(TOKEN, TOKEN));
    assert!(!tokens_match(TOKEN, &TOKEN[..31]));
    assert!(!tokens_match(TOKEN, "1123456789abcdef0123456789abcdef"));
    assert!(!tokens_match(TOKEN, ""));
}
