//! Event schedule configuration.
//!
//! Drives the one-shot slot seeder: a fixed number of back-to-back windows
//! starting at the event's opening time.

use serde::{Deserialize, Serialize};

/// Event schedule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    /// Event opening time (RFC 3339, e.g. `2026-02-20T10:00:00Z`).
    #[serde(default = "default_start_time")]
    pub start_time: String,
    /// Number of bookable windows.
    #[serde(default = "default_slot_count")]
    pub slot_count: u32,
    /// Length of each window in minutes.
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            start_time: default_start_time(),
            slot_count: default_slot_count(),
            slot_minutes: default_slot_minutes(),
        }
    }
}

fn default_start_time() -> String {
    "2026-02-20T10:00:00Z".to_string()
}

fn default_slot_count() -> u32 {
    80
}

fn default_slot_minutes() -> u32 {
    10
}
