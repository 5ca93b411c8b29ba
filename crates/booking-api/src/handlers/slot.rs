//! Slot catalog handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use booking_core::error::AppError;

use crate::dto::request::RosterQuery;
use crate::dto::response::{RosterEntry, SlotResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/slots
///
/// The full catalog ordered by start time, with both clubs' occupancy as
/// of the latest committed booking.
pub async fn list_slots(
    State(state): State<AppState>,
) -> Result<Json<Vec<SlotResponse>>, ApiError> {
    let slots = state.slot_repo.list_all().await?;
    Ok(Json(slots.into_iter().map(SlotResponse::from).collect()))
}

/// GET /api/slots/{id}/bookings?club=
///
/// Roster of committed bookings for one (slot, club) pair.
pub async fn slot_roster(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RosterQuery>,
) -> Result<Json<Vec<RosterEntry>>, ApiError> {
    if state.slot_repo.find_by_id(id).await?.is_none() {
        return Err(AppError::not_found("Time slot not found").into());
    }

    let roster = state.booking_service.roster(id, query.club).await?;
    Ok(Json(roster.into_iter().map(RosterEntry::from).collect()))
}
