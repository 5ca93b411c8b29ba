//! Seat booking handler.

use axum::Json;
use axum::extract::State;

use crate::dto::request::BookSlotRequest;
use crate::dto::response::BookingResponse;
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthSession};
use crate::state::AppState;

/// POST /api/bookings
///
/// Claims one seat. Identity comes from the bearer credential; the body
/// names only the slot and club. Success implies the booking row and the
/// counter increment are durable; any rejection left no state behind.
pub async fn book_slot(
    State(state): State<AppState>,
    session: AuthSession,
    ApiJson(req): ApiJson<BookSlotRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    let booking = state
        .booking_service
        .book_slot(&session.phone, req.time_slot_id, req.club)
        .await?;

    Ok(Json(booking.into()))
}
