//! Rate limiting configuration.

use serde::{Deserialize, Serialize};

/// Token-bucket rate limiter configuration.
///
/// The limiter is held in per-instance memory. Deployments running more
/// than one instance must put a shared-store limiter in front; this layer
/// bounds abuse on a single node and is independent of the booking
/// operation's atomicity guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Whether rate limiting is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Maximum burst size per client.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Token refill rate per second per client.
    #[serde(default = "default_refill_rate")]
    pub refill_rate: f64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_tokens: default_max_tokens(),
            refill_rate: default_refill_rate(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_max_tokens() -> u32 {
    5
}

fn default_refill_rate() -> f64 {
    0.2
}
