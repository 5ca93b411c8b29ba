//! Registration and profile handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use booking_core::error::AppError;

use crate::dto::request::RegisterRequest;
use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthSession};
use crate::state::AppState;

/// POST /api/users
///
/// Completes registration for the verified phone number. The phone comes
/// from the credential, never from the body.
pub async fn register(
    State(state): State<AppState>,
    session: AuthSession,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))?;

    let user = state
        .registration_service
        .register(&session.phone, &req.name, &req.scholar_number, req.gender)
        .await?;

    Ok(Json(user.into()))
}

/// GET /api/users/me
pub async fn me(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .registration_service
        .profile(&session.phone)
        .await?
        .ok_or_else(|| AppError::not_found("User not found. Please complete registration."))?;

    Ok(Json(user.into()))
}
