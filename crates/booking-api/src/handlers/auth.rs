//! Phone-verification handler.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use booking_core::error::AppError;

use crate::dto::request::VerifyPhoneRequest;
use crate::dto::response::VerifyPhoneResponse;
use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// POST /api/auth/verify-phone
///
/// Resolves the OTP provider's user-JSON URL into a verified phone and
/// issues the session token bound to it.
pub async fn verify_phone(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<VerifyPhoneRequest>,
) -> Result<Json<VerifyPhoneResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))?;

    let verified = state.phone_verifier.resolve(&req.user_json_url).await?;
    let (token, _claims) = state.jwt_encoder.issue(&verified.phone)?;

    Ok(Json(VerifyPhoneResponse {
        success: true,
        token,
        phone: verified.phone,
        name: verified.name,
    }))
}
