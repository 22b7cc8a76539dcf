//! Axum extractor authenticating the gateway on `/api/*`

use crate::{ApiError, AppState};

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use error_location::ErrorLocation;

/// Proof that the request carried `Authorization: Bearer <server.api_token>`.
///
/// Only the gateway's login flow holds the token, so only identities it
/// has already authenticated reach the account endpoints.
pub struct ApiCaller;

impl FromRequestParts<AppState> for ApiCaller {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(expected) = state.api_token.as_deref() else {
                return Err(ApiError::Unauthorized {
                    message: "Account API is disabled: no API token configured".into(),
                    location: ErrorLocation::from(Location::caller()),
                });
            };

            let presented = parts
                .headers
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.strip_prefix("Bearer "));

            match presented {
                Some(token) if tokens_match(expected, token) => Ok(ApiCaller),
                Some(_) => {
                    log::warn!("Rejected API call with an invalid bearer token");
                    Err(ApiError::Unauthorized {
                        message: "Invalid API token".into(),
                        location: ErrorLocation::from(Location::caller()),
                    })
                }
                None => Err(ApiError::Unauthorized {
                    message: "Missing bearer token".into(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}

/// Compares every byte so timing does not reveal the matching prefix.
pub(crate) fn tokens_match(expected: &str, presented: &str) -> bool {
    expected.len() == presented.len()
        && expected
            .bytes()
            .zip(presented.bytes())
            .fold(0u8, |diff, (a, b)| diff | (a ^ b))
            == 0
}
