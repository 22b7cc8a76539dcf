pub mod account_dto;
pub mod account_response;
#[allow(clippy::module_inception)]
pub mod accounts;
pub mod allowlist_response;
pub mod authorization_response;
pub mod create_account_request;
pub mod spawn_plan_response;
