//! Response body DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use booking_entity::booking::{Booking, BookingWithUser, Club};
use booking_entity::slot::{SLOT_CAPACITY, TimeSlot};
use booking_entity::user::User;

/// Result of a successful phone verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPhoneResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Session token to present as a bearer credential.
    pub token: String,
    /// The verified phone number.
    pub phone: String,
    /// Display name from the provider, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A registered user's public profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User identifier.
    pub id: Uuid,
    /// Verified phone number.
    pub phone: String,
    /// Display name.
    pub name: String,
    /// Scholar number.
    pub scholar_number: String,
    /// Gender.
    pub gender: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            phone: user.phone,
            name: user.name,
            scholar_number: user.scholar_number,
            gender: user.gender.to_string(),
            created_at: user.created_at,
        }
    }
}

/// One catalog slot with both clubs' occupancy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    /// Slot identifier.
    pub id: Uuid,
    /// Window start.
    pub start_time: DateTime<Utc>,
    /// Window end.
    pub end_time: DateTime<Utc>,
    /// Human-readable label.
    pub slot_name: String,
    /// Committed Xploit bookings.
    pub xploit_bookings: i16,
    /// Committed E-Cell bookings.
    pub ecell_bookings: i16,
    /// Seats per club per slot.
    pub capacity: i16,
}

impl From<TimeSlot> for SlotResponse {
    fn from(slot: TimeSlot) -> Self {
        Self {
            id: slot.id,
            start_time: slot.start_time,
            end_time: slot.end_time,
            slot_name: slot.slot_name,
            xploit_bookings: slot.xploit_bookings,
            ecell_bookings: slot.ecell_bookings,
            capacity: SLOT_CAPACITY,
        }
    }
}

/// Result of a successful seat allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The created booking.
    pub booking: BookingBody,
}

/// Booking fields on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingBody {
    /// Booking identifier.
    pub id: Uuid,
    /// Booked slot.
    pub time_slot_id: Uuid,
    /// Club.
    pub club: Club,
    /// Claim time.
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            success: true,
            booking: BookingBody {
                id: booking.id,
                time_slot_id: booking.time_slot_id,
                club: booking.club,
                created_at: booking.created_at,
            },
        }
    }
}

/// One entry in a slot's roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Booking identifier.
    pub id: Uuid,
    /// Owner's display name.
    pub name: String,
    /// Owner's scholar number.
    pub scholar_number: String,
    /// Claim time.
    pub created_at: DateTime<Utc>,
}

impl From<BookingWithUser> for RosterEntry {
    fn from(b: BookingWithUser) -> Self {
        Self {
            id: b.id,
            name: b.user_name,
            scholar_number: b.scholar_number,
            created_at: b.created_at,
        }
    }
}

/// Health probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when the probe passed.
    pub status: String,
}
