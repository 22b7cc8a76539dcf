pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    accounts::{
        account_dto::AccountDto,
        account_response::AccountResponse,
        accounts::{authorize_account, create_account, list_allowlist, spawn_plan},
        allowlist_response::AllowlistResponse,
        authorization_response::AuthorizationResponse,
        create_account_request::CreateAccountRequest,
        spawn_plan_response::SpawnPlanResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::api_caller::ApiCaller,
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
