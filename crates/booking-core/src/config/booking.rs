//! Booking policy configuration.

use serde::{Deserialize, Serialize};

/// How duplicate bookings by the same user are constrained within one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// At most one booking per user per slot, regardless of club.
    PerSlot,
    /// At most one booking per user per (slot, club) pair; the same user
    /// may hold seats in both clubs for the same slot.
    PerSlotClub,
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        Self::PerSlot
    }
}

/// Booking policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BookingConfig {
    /// Duplicate-booking policy for a single slot.
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}
