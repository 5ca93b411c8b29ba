//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::club::Club;

/// One user's claim on one seat of one slot for one club.
///
/// Rows are created exclusively by the seat allocator transaction and are
/// never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Booked slot.
    pub time_slot_id: Uuid,
    /// Club whose seat pool the booking counts against.
    pub club: Club,
    /// When the seat was claimed.
    pub created_at: DateTime<Utc>,
}

/// A booking joined with the owner's public display fields, for the
/// per-slot roster view.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingWithUser {
    /// Unique booking identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Booked slot.
    pub time_slot_id: Uuid,
    /// Club whose seat pool the booking counts against.
    pub club: Club,
    /// When the seat was claimed.
    pub created_at: DateTime<Utc>,
    /// Owner's display name.
    pub user_name: String,
    /// Owner's scholar number.
    pub scholar_number: String,
}
