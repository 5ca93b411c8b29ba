//! Bearer-token extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use booking_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated session, resolved from the `Authorization` header.
///
/// Carries only what the credential proves: the verified phone number.
/// Handlers resolve phone → user themselves so that "no such user" stays
/// distinct from "unauthenticated".
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The verified phone number from the token's subject claim.
    pub phone: String,
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Expected a bearer token"))?;

        let claims = state.jwt_decoder.verify(token)?;

        Ok(Self {
            phone: claims.sub,
        })
    }
}
