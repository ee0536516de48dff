//! Authenticated-caller extractor.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::state::AppState;

/// The caller identified by a valid `Authorization: Bearer <token>` header.
///
/// Handlers taking this argument never run for unauthenticated requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Email of the caller.
    pub email: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(AUTHORIZATION) else {
            return Err(ApiError::Unauthorized("Missing Authorization header".to_string()));
        };

        let Ok(value) = value.to_str() else {
            return Err(ApiError::Unauthorized("Malformed Authorization header".to_string()));
        };

        let Some(token) = value.strip_prefix("Bearer ") else {
            return Err(ApiError::Unauthorized("Expected a Bearer token".to_string()));
        };

        let claims = state.sessions.verify(token.trim())?;
        Ok(AuthUser { email: claims.sub })
    }
}
