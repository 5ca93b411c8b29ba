//! One-shot slot seeding.
//!
//! Generates the fixed set of bookable windows from [`EventConfig`] and
//! inserts them if the catalog is empty. The slot set is never structurally
//! modified afterward; only the occupancy counters change.

use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use tracing::info;

use booking_core::config::event::EventConfig;
use booking_core::error::{AppError, ErrorKind};
use booking_core::result::AppResult;

/// A slot row to be inserted by the seeder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSlot {
    /// Window start.
    pub start_time: DateTime<Utc>,
    /// Window end.
    pub end_time: DateTime<Utc>,
    /// Human-readable label.
    pub slot_name: String,
}

/// Generate the slot windows described by the event configuration.
///
/// Windows are back-to-back, each `slot_minutes` long, starting at the
/// event opening time. One row per window; both clubs' counters live on
/// the same row and start at zero.
pub fn generate_slots(config: &EventConfig) -> AppResult<Vec<SeedSlot>> {
    let start: DateTime<Utc> = config
        .start_time
        .parse()
        .map_err(|e| {
            AppError::configuration(format!(
                "Invalid event.start_time '{}': {e}",
                config.start_time
            ))
        })?;

    let window = Duration::minutes(config.slot_minutes as i64);
    let mut slots = Vec::with_capacity(config.slot_count as usize);

    for i in 0..config.slot_count {
        let start_time = start + window * i as i32;
        let end_time = start_time + window;
        let slot_name = format!(
            "{} - {}",
            start_time.format("%I:%M %p"),
            end_time.format("%I:%M %p")
        );
        slots.push(SeedSlot {
            start_time,
            end_time,
            slot_name,
        });
    }

    Ok(slots)
}

/// Seed the slot catalog if it is empty. Idempotent across restarts.
pub async fn seed_slots(pool: &PgPool, config: &EventConfig) -> AppResult<u64> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM time_slots")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count slots", e))?;

    if existing > 0 {
        info!(existing, "Slot catalog already seeded, skipping");
        return Ok(0);
    }

    let slots = generate_slots(config)?;
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin seed", e))?;

    for slot in &slots {
        sqlx::query(
            "INSERT INTO time_slots (start_time, end_time, slot_name) VALUES ($1, $2, $3)",
        )
        .bind(slot.start_time)
        .bind(slot.end_time)
        .bind(&slot.slot_name)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert slot", e))?;
    }

    tx.commit()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit seed", e))?;

    info!(count = slots.len(), "Seeded slot catalog");
    Ok(slots.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EventConfig {
        EventConfig {
            start_time: "2026-02-20T10:00:00Z".to_string(),
            slot_count: 80,
            slot_minutes: 10,
        }
    }

    #[test]
    fn test_generates_configured_count() {
        let slots = generate_slots(&config()).unwrap();
        assert_eq!(slots.len(), 80);
    }

    #[test]
    fn test_windows_are_back_to_back() {
        let slots = generate_slots(&config()).unwrap();
        for pair in slots.windows(2) {
            assert_eq!(pair[0].end_time, pair[1].start_time);
            assert_eq!(pair[0].end_time - pair[0].start_time, Duration::minutes(10));
        }
    }

    #[test]
    fn test_label_format() {
        let slots = generate_slots(&config()).unwrap();
        assert_eq!(slots[0].slot_name, "10:00 AM - 10:10 AM");
        assert_eq!(slots[79].slot_name, "11:10 PM - 11:20 PM");
    }

    #[test]
    fn test_rejects_malformed_start_time() {
        let mut cfg = config();
        cfg.start_time = "tomorrow-ish".to_string();
        assert!(generate_slots(&cfg).is_err());
    }
}
