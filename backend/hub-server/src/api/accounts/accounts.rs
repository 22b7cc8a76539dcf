//! Account REST API handlers
//!
//! The login flow posts each authenticated identity here; the process
//! supervisor asks for authorization and the spawn plan. Every handler
//! requires [`ApiCaller`].

use crate::{
    AccountResponse, AllowlistResponse, ApiCaller, ApiError, ApiResult, AppState,
    AuthorizationResponse, CreateAccountRequest, SpawnPlanResponse,
};

use hub_auth::LocalAccountName;
use hub_provision::SpawnPlan;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/accounts
///
/// Provision the local account behind an identity and register it
pub async fn create_account(
    _caller: ApiCaller,
    State(state): State<AppState>,
    Json(req): Json<CreateAccountRequest>,
) -> ApiResult<(StatusCode, Json<AccountResponse>)> {
    let outcome = state.provisioner.add_user(&req.username).await?;

    let status = if outcome.status.was_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(AccountResponse {
            account: outcome.into(),
        }),
    ))
}

/// GET /api/accounts/{name}/authorization
pub async fn authorize_account(
    _caller: ApiCaller,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<AuthorizationResponse>> {
    let name = LocalAccountName::from_identity(&name)?;
    let registry = state.provisioner.registry();

    Ok(Json(AuthorizationResponse {
        allowed: registry.is_allowed(&name).await,
        admin: registry.is_admin(&name).await,
        name: name.to_string(),
    }))
}

/// GET /api/accounts/{name}/spawn
///
/// Launch plan for a notebook session; refused for names off the allow-list
pub async fn spawn_plan(
    _caller: ApiCaller,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<SpawnPlanResponse>> {
    let name = LocalAccountName::from_identity(&name)?;

    if !state.provisioner.registry().is_allowed(&name).await {
        return Err(ApiError::Forbidden {
            message: format!("User {name} is not on the allow-list"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let home = state.provisioner.commands().home_dir(&name);
    let plan = SpawnPlan::build(&state.spawner, &name, &home, std::env::vars());
    info!("Spawn plan for {name}: {}", plan.argv.join(" "));

    Ok(Json(plan.into()))
}

/// GET /api/allowlist
pub async fn list_allowlist(
    _caller: ApiCaller,
    State(state): State<AppState>,
) -> Json<AllowlistResponse> {
    let registry = state.provisioner.registry();

    Json(AllowlistResponse {
        enabled: registry.allow_list_enabled().await,
        allowed_users: registry.allowed_users().await,
        admin_users: registry.admin_users().await,
    })
}
