use axum::http::HeaderMap;

use bistro_auth_types::bearer::authenticate_bearer;
use bistro_auth_types::token::TokenInfo;

use crate::error::ApiServiceError;

pub mod cart;
pub mod menu;
pub mod payment;
pub mod review;
pub mod stats;
pub mod token;
pub mod user;

/// Verify the bearer credential on a protected route.
///
/// Runs before any store access; both a missing and an invalid credential
/// reject with 401.
pub(crate) fn authenticate(
    headers: &HeaderMap,
    secret: &str,
) -> Result<TokenInfo, ApiServiceError> {
    authenticate_bearer(headers, secret).map_err(|_| ApiServiceError::Unauthorized)
}
