//! Bearer credential extraction from request headers.

use http::HeaderMap;
use http::header::AUTHORIZATION;

use crate::token::{AuthError, TokenInfo, validate_token};

/// Errors produced while authenticating a request.
#[derive(Debug, thiserror::Error)]
pub enum BearerError {
    /// No `Authorization` header (or not a `Bearer` scheme) on the request.
    #[error("missing bearer credential")]
    Missing,
    /// A credential was presented but failed validation.
    #[error("invalid bearer credential")]
    Invalid(#[source] AuthError),
}

/// Pull the raw token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
}

/// Authenticate a request: extract the bearer token and validate it.
///
/// Distinguishes a missing credential from an invalid one so callers can
/// report the two cases separately.
pub fn authenticate_bearer(headers: &HeaderMap, secret: &str) -> Result<TokenInfo, BearerError> {
    let token = bearer_token(headers).ok_or(BearerError::Missing)?;
    validate_token(token, secret).map_err(BearerError::Invalid)
}
