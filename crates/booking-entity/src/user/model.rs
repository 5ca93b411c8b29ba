//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::gender::Gender;

/// A registered event participant.
///
/// Created once during profile completion and immutable thereafter; there
/// is no update or delete path. Bookings reference users by id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Verified phone number, the natural login key. Unique.
    pub phone: String,
    /// Display name.
    pub name: String,
    /// Scholar (registration) number. Unique.
    pub scholar_number: String,
    /// Participant gender.
    pub gender: Gender,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Verified phone number.
    pub phone: String,
    /// Display name.
    pub name: String,
    /// Scholar number.
    pub scholar_number: String,
    /// Participant gender.
    pub gender: Gender,
}
