//! Booking repository and the seat allocator transaction.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use booking_core::config::booking::DuplicatePolicy;
use booking_core::error::{AppError, ErrorKind};
use booking_core::result::AppResult;
use booking_entity::booking::{Booking, BookingWithUser, Club};
use booking_entity::slot::SLOT_CAPACITY;

/// Unique-violation SQLSTATE code.
const UNIQUE_VIOLATION: &str = "23505";

/// Outcome of one seat allocation attempt.
///
/// Every variant except `Booked` leaves zero state change behind; the
/// transaction is rolled back in full.
#[derive(Debug, Clone, PartialEq)]
pub enum AllocationOutcome {
    /// A seat was claimed; the booking row exists and the counter is
    /// durably incremented.
    Booked(Booking),
    /// The slot id references no slot.
    SlotNotFound,
    /// The user id references no user.
    UserNotFound,
    /// The club's seat pool for this slot was full at commit time.
    SlotFull,
    /// The user already holds a booking for this slot under the
    /// configured duplicate policy.
    Duplicate,
}

/// Repository for the booking ledger and the atomic seat allocator.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Atomically claim one seat of `slot_id` for `club` on behalf of
    /// `user_id`.
    ///
    /// The capacity check and the booking insert execute as one
    /// transaction. The conditional counter update
    /// (`... SET counter = counter + 1 WHERE counter < 4`) is a
    /// single-statement increment-with-ceiling: the row lock it takes
    /// serializes every rival for the same slot, so of N concurrent calls
    /// racing for K open seats exactly K commit and N-K observe
    /// `SlotFull`. The duplicate probe runs while that lock is held and is
    /// therefore race-free too.
    pub async fn allocate(
        &self,
        user_id: Uuid,
        slot_id: Uuid,
        club: Club,
        policy: DuplicatePolicy,
    ) -> AppResult<AllocationOutcome> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin booking", e)
        })?;

        // Slots and users are never deleted, so these pre-lock existence
        // probes cannot go stale.
        if !exists(&mut tx, "SELECT EXISTS(SELECT 1 FROM time_slots WHERE id = $1)", slot_id)
            .await?
        {
            tx.rollback().await.ok();
            return Ok(AllocationOutcome::SlotNotFound);
        }

        if !exists(&mut tx, "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)", user_id).await? {
            tx.rollback().await.ok();
            return Ok(AllocationOutcome::UserNotFound);
        }

        // The atomic capacity gate. Zero rows means the counter was
        // already at capacity when the row lock was granted.
        let col = club.counter_column();
        let update_sql = format!(
            "UPDATE time_slots SET {col} = {col} + 1 \
             WHERE id = $1 AND {col} < $2 RETURNING id"
        );

        let updated: Option<Uuid> = sqlx::query_scalar(&update_sql)
            .bind(slot_id)
            .bind(SLOT_CAPACITY)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to increment occupancy", e)
            })?;

        if updated.is_none() {
            tx.rollback().await.ok();
            return Ok(AllocationOutcome::SlotFull);
        }

        let duplicate = match policy {
            DuplicatePolicy::PerSlot => {
                exists_booking(&mut tx, user_id, slot_id, None).await?
            }
            DuplicatePolicy::PerSlotClub => {
                exists_booking(&mut tx, user_id, slot_id, Some(club)).await?
            }
        };

        if duplicate {
            tx.rollback().await.ok();
            return Ok(AllocationOutcome::Duplicate);
        }

        let inserted = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (user_id, time_slot_id, club) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(user_id)
        .bind(slot_id)
        .bind(club)
        .fetch_one(&mut *tx)
        .await;

        let booking = match inserted {
            Ok(b) => b,
            Err(sqlx::Error::Database(db)) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                tx.rollback().await.ok();
                return Ok(AllocationOutcome::Duplicate);
            }
            Err(e) => {
                tx.rollback().await.ok();
                return Err(AppError::with_source(
                    ErrorKind::Database,
                    "Failed to insert booking",
                    e,
                ));
            }
        };

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit booking", e)
        })?;

        Ok(AllocationOutcome::Booked(booking))
    }

    /// List the bookings for one (slot, club) pair joined with the owners'
    /// display fields, ordered by claim time.
    pub async fn list_for_slot(
        &self,
        slot_id: Uuid,
        club: Club,
    ) -> AppResult<Vec<BookingWithUser>> {
        sqlx::query_as::<_, BookingWithUser>(
            "SELECT b.id, b.user_id, b.time_slot_id, b.club, b.created_at, \
                    u.name AS user_name, u.scholar_number \
             FROM bookings b JOIN users u ON u.id = b.user_id \
             WHERE b.time_slot_id = $1 AND b.club = $2 \
             ORDER BY b.created_at ASC",
        )
        .bind(slot_id)
        .bind(club)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list slot bookings", e)
        })
    }

}

async fn exists(
    tx: &mut Transaction<'_, Postgres>,
    sql: &str,
    id: Uuid,
) -> AppResult<bool> {
    sqlx::query_scalar(sql)
        .bind(id)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Existence probe failed", e))
}

async fn exists_booking(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    slot_id: Uuid,
    club: Option<Club>,
) -> AppResult<bool> {
    let result = match club {
        Some(club) => {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM bookings \
                 WHERE user_id = $1 AND time_slot_id = $2 AND club = $3)",
            )
            .bind(user_id)
            .bind(slot_id)
            .bind(club)
            .fetch_one(&mut **tx)
            .await
        }
        None => {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM bookings \
                 WHERE user_id = $1 AND time_slot_id = $2)",
            )
            .bind(user_id)
            .bind(slot_id)
            .fetch_one(&mut **tx)
            .await
        }
    };

    result.map_err(|e| AppError::with_source(ErrorKind::Database, "Duplicate probe failed", e))
}
