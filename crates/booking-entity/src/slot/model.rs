//! Time slot entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::booking::Club;

/// Maximum seats per (slot, club) pair.
pub const SLOT_CAPACITY: i16 = 4;

/// One bookable 10-minute window on the event date.
///
/// Each row carries both clubs' occupancy counters. The slot set is seeded
/// once; only the counters change afterward, and only through the seat
/// allocator transaction. Invariant: `0 <= counter <= SLOT_CAPACITY` for
/// both counters, enforced by CHECK constraints and the conditional update.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TimeSlot {
    /// Unique slot identifier.
    pub id: Uuid,
    /// Window start.
    pub start_time: DateTime<Utc>,
    /// Window end.
    pub end_time: DateTime<Utc>,
    /// Human-readable label, e.g. `"10:00 AM - 10:10 AM"`.
    pub slot_name: String,
    /// Committed bookings for the Xploit club.
    pub xploit_bookings: i16,
    /// Committed bookings for the E-Cell club.
    pub ecell_bookings: i16,
    /// When the slot was seeded.
    pub created_at: DateTime<Utc>,
}

impl TimeSlot {
    /// Occupancy counter for the given club.
    pub fn occupancy(&self, club: Club) -> i16 {
        match club {
            Club::Xploit => self.xploit_bookings,
            Club::Ecell => self.ecell_bookings,
        }
    }

    /// Remaining seats for the given club.
    pub fn seats_left(&self, club: Club) -> i16 {
        SLOT_CAPACITY - self.occupancy(club)
    }

    /// Whether the given club still has an open seat.
    pub fn has_capacity(&self, club: Club) -> bool {
        self.occupancy(club) < SLOT_CAPACITY
    }
}
