//! Change-feed events.
//!
//! Committed writes to the `time_slots` and `bookings` tables emit a
//! [`ChangeEvent`]. The payload is an invalidation signal, not a row copy:
//! subscribers re-fetch the slot catalog when they observe one. Events are
//! published after commit, in commit order per table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The table a change event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeTable {
    /// The slot catalog (occupancy counters changed).
    TimeSlots,
    /// The booking ledger (a seat claim was inserted).
    Bookings,
}

impl ChangeTable {
    /// Return the table name as stored in Postgres.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TimeSlots => "time_slots",
            Self::Bookings => "bookings",
        }
    }
}

/// The kind of committed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOp {
    /// A row was inserted.
    Insert,
    /// A row was updated.
    Update,
}

/// An invalidation event for one committed write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// The table that changed.
    pub table: ChangeTable,
    /// The kind of write.
    pub op: ChangeOp,
    /// Primary key of the affected row, when known.
    pub row_id: Option<Uuid>,
    /// Commit-side timestamp.
    pub at: DateTime<Utc>,
}

impl ChangeEvent {
    /// Create an event stamped with the current time.
    pub fn now(table: ChangeTable, op: ChangeOp, row_id: Option<Uuid>) -> Self {
        Self {
            table,
            op,
            row_id,
            at: Utc::now(),
        }
    }
}
