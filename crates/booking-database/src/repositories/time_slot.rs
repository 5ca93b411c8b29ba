//! Time slot repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use booking_core::error::{AppError, ErrorKind};
use booking_core::result::AppResult;
use booking_entity::slot::TimeSlot;

/// Repository for the slot catalog. Read-only; counters are written only
/// by the seat allocator transaction.
#[derive(Debug, Clone)]
pub struct TimeSlotRepository {
    pool: PgPool,
}

impl TimeSlotRepository {
    /// Create a new time slot repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all slots ordered by start time, reflecting the latest
    /// committed occupancy.
    pub async fn list_all(&self) -> AppResult<Vec<TimeSlot>> {
        sqlx::query_as::<_, TimeSlot>("SELECT * FROM time_slots ORDER BY start_time ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list slots", e))
    }

    /// Find a slot by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<TimeSlot>> {
        sqlx::query_as::<_, TimeSlot>("SELECT * FROM time_slots WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find slot", e))
    }
}
