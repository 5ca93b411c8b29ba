//! Real-time change feed configuration.

use serde::{Deserialize, Serialize};

/// Real-time change feed and WebSocket configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Broadcast buffer size per feed. Slow subscribers that fall more than
    /// this many events behind miss events and must re-fetch.
    #[serde(default = "default_feed_buffer")]
    pub feed_buffer: usize,
    /// Per-connection outbound queue size.
    #[serde(default = "default_outbound_buffer")]
    pub outbound_buffer: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            feed_buffer: default_feed_buffer(),
            outbound_buffer: default_outbound_buffer(),
        }
    }
}

fn default_feed_buffer() -> usize {
    256
}

fn default_outbound_buffer() -> usize {
    64
}
