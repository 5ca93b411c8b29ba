//! In-process change feed.
//!
//! A single broadcast channel carries [`ChangeEvent`]s for both watched
//! tables. Publishers call [`ChangeFeed::publish`] after their transaction
//! commits, never inside it, so subscribers only ever observe committed
//! state. Publishing never blocks and never waits for fan-out.
//!
//! Delivery is at-most-once per subscriber: a receiver that lags more than
//! the buffer size misses events. Handlers must therefore treat events as
//! triggers to re-fetch, not as the sole source of state.

use tokio::sync::broadcast;
use tracing::debug;

use booking_core::events::ChangeEvent;

/// Broadcast-based change feed for committed table writes.
#[derive(Debug)]
pub struct ChangeFeed {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeFeed {
    /// Create a feed with the given subscriber buffer size.
    pub fn new(buffer: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer);
        Self { sender }
    }

    /// Publish a committed change to all current subscribers.
    ///
    /// Returns the number of subscribers the event was queued for. An
    /// empty subscriber set is not an error.
    pub fn publish(&self, event: ChangeEvent) -> usize {
        let delivered = self.sender.send(event.clone()).unwrap_or(0);
        debug!(
            table = event.table.as_str(),
            subscribers = delivered,
            "Change event published"
        );
        delivered
    }

    /// Open a new subscription starting at the current feed position.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }
}
