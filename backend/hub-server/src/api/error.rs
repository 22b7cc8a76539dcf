//! REST API error types
//!
//! Every failure becomes a JSON body `{ "error": { code, message, field? } }`
//! with a matching HTTP status.

use hub_auth::AuthError;
use hub_provision::ProvisionError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "FORBIDDEN", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Caller did not present the API token (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// User is not on the allow-list (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Account name already claimed by another identity (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let (status, code, message, field) = match self {
            ApiError::Validation { message, field, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApiError::Unauthorized { message, .. } => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message, None)
            }
            ApiError::Forbidden { message, .. } => {
                (StatusCode::FORBIDDEN, "FORBIDDEN", message, None)
            }
            ApiError::Conflict { message, .. } => (StatusCode::CONFLICT, "CONFLICT", message, None),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message,
                None,
            ),
        };

        let body = ApiErrorBody {
            code: code.into(),
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::InvalidUsername {
                ref identity,
                ref message,
                ..
            } => ApiError::Validation {
                message: format!("'{identity}' {message}"),
                field: Some("username".into()),
                location,
            },
            AuthError::IdentityCollision { ref name, .. } => ApiError::Conflict {
                message: format!("Account {name} belongs to a different identity"),
                location,
            },
            AuthError::ClaimStore { .. } => {
                log::error!("Identity claims error: {}", e);
                ApiError::Internal {
                    message: "Could not record account ownership".to_string(),
                    location,
                }
            }
        }
    }
}

/// OS-level failures are logged in full; clients only see which account failed.
impl From<ProvisionError> for ApiError {
    #[track_caller]
    fn from(e: ProvisionError) -> Self {
        match e {
            ProvisionError::Auth(auth) => auth.into(),
            ProvisionError::AccountCreation { ref name, .. }
            | ProvisionError::AccountLookup { ref name, .. } => {
                log::error!("Provisioning error: {}", e);
                ApiError::Internal {
                    message: format!("Could not provision account {name}"),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            ProvisionError::Spawn { .. } => {
                log::error!("Provisioning error: {}", e);
                ApiError::Internal {
                    message: "Account provisioning failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
