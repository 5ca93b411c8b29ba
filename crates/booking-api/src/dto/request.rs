//! Request body DTOs.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use booking_entity::booking::Club;
use booking_entity::user::Gender;

/// POST /api/auth/verify-phone
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyPhoneRequest {
    /// One-time URL to the provider's verified-user JSON blob.
    #[validate(url)]
    pub user_json_url: String,
}

/// POST /api/users
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    /// Scholar (registration) number.
    #[validate(length(min = 1, max = 40))]
    pub scholar_number: String,
    /// Participant gender.
    pub gender: Gender,
}

/// POST /api/bookings
#[derive(Debug, Clone, Deserialize)]
pub struct BookSlotRequest {
    /// Slot to claim a seat in.
    pub time_slot_id: Uuid,
    /// Club whose seat pool to claim from. An unknown value fails
    /// deserialization with a validation error.
    pub club: Club,
}

/// Query string for the per-slot roster.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterQuery {
    /// Club to list bookings for.
    pub club: Club,
}
