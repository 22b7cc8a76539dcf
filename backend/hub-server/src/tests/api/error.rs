use crate::ApiError;

use hub_auth::{AuthError, LocalAccountName};
use hub_provision::ProvisionError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn json_body(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Username is empty".into(),
        field: Some("username".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = json_body(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let error = ApiError::Unauthorized {
        message: "Missing bearer token".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = json_body(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Missing bearer token");
}

#[tokio::test]
async fn test_forbidden_returns_403_without_field() {
    let error = ApiError::Forbidden {
        message: "User bob is not on the allow-list".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = json_body(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let error = ApiError::Conflict {
        message: "Account jdoe belongs to a different identity".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = json_body(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Could not provision account alice".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = json_body(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_invalid_username_converts_to_validation() {
    let auth_error = LocalAccountName::from_identity("(...)").unwrap_err();

    let api_error: ApiError = auth_error.into();

    assert!(matches!(
        api_error,
        ApiError::Validation { field: Some(ref f), .. } if f == "username"
    ));
}

#[test]
fn test_identity_collision_converts_to_conflict() {
    let auth_error = AuthError::IdentityCollision {
        identity: "j doe".into(),
        name: "jdoe".into(),
        claimed_by: "J.Doe".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = ProvisionError::from(auth_error).into();

    assert!(matches!(api_error, ApiError::Conflict { .. }));
}

#[test]
fn test_account_creation_failure_hides_stderr() {
    let error = ProvisionError::AccountCreation {
        name: "alice".into(),
        diagnostic: "exit status 1: adduser: Permission denied".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = error.into();

    match api_error {
        ApiError::Internal { message, .. } => {
            assert!(message.contains("alice"));
            assert!(!message.contains("Permission denied"));
        }
        other => panic!("expected internal error, got {other:?}"),
    }
}

#[test]
fn test_spawn_failure_converts_to_internal() {
    let error = ProvisionError::Spawn {
        program: "sudo".into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = error.into();

    assert!(matches!(api_error, ApiError::Internal { .. }));
}

#[tokio::test]
async fn test_claim_store_failure_converts_to_internal_without_path() {
    let auth_error = AuthError::ClaimStore {
        path: "/srv/hub/claims.toml".into(),
        message: "Permission denied".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = ProvisionError::from(auth_error).into();
    let (status, json) = json_body(api_error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Could not record account ownership");
    assert!(!json.to_string().contains("claims.toml"));
}
