//! WebSocket connection registry.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::message::Envelope;

/// Handle describing one registered connection.
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    /// Server-assigned connection id.
    pub id: Uuid,
    /// Phone number the connection authenticated with.
    pub phone: String,
}

/// Registry of live WebSocket connections with per-connection outbound
/// queues.
#[derive(Debug)]
pub struct ConnectionManager {
    connections: DashMap<Uuid, mpsc::Sender<Envelope>>,
    outbound_buffer: usize,
}

impl ConnectionManager {
    /// Create a new connection manager.
    pub fn new(outbound_buffer: usize) -> Self {
        Self {
            connections: DashMap::new(),
            outbound_buffer,
        }
    }

    /// Register a new connection; returns its handle and the receiving end
    /// of its outbound queue.
    pub fn register(&self, phone: &str) -> (ConnectionHandle, mpsc::Receiver<Envelope>) {
        let (tx, rx) = mpsc::channel(self.outbound_buffer);
        let handle = ConnectionHandle {
            id: Uuid::new_v4(),
            phone: phone.to_string(),
        };
        self.connections.insert(handle.id, tx);
        info!(conn_id = %handle.id, "WebSocket connection registered");
        (handle, rx)
    }

    /// Remove a connection from the registry.
    pub fn unregister(&self, id: &Uuid) {
        if self.connections.remove(id).is_some() {
            info!(conn_id = %id, "WebSocket connection unregistered");
        }
    }

    /// Queue an envelope on every live connection.
    ///
    /// Connections with a full queue are skipped; they will catch up via
    /// their own feed subscription or a re-fetch.
    pub fn broadcast(&self, envelope: &Envelope) {
        for entry in self.connections.iter() {
            if entry.value().try_send(envelope.clone()).is_err() {
                debug!(conn_id = %entry.key(), "Outbound queue full, dropping event");
            }
        }
    }

    /// Number of live connections.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

/// Forwards feed events to all registered connections until the feed
/// closes. Spawned once at startup.
pub async fn forward_feed(
    manager: Arc<ConnectionManager>,
    mut feed_rx: tokio::sync::broadcast::Receiver<booking_core::events::ChangeEvent>,
) {
    loop {
        match feed_rx.recv().await {
            Ok(event) => {
                let envelope = Envelope::from(event);
                manager.broadcast(&envelope);
            }
            Err(tokio::sync::broadcast::error::RecvError::Lagged(missed)) => {
                debug!(missed, "Feed forwarder lagged");
            }
            Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_core::events::{ChangeEvent, ChangeOp, ChangeTable};

    #[tokio::test]
    async fn test_register_broadcast_unregister() {
        let manager = ConnectionManager::new(8);
        let (handle, mut rx) = manager.register("+911234567890");
        assert_eq!(manager.connection_count(), 1);

        let envelope =
            Envelope::from(ChangeEvent::now(ChangeTable::TimeSlots, ChangeOp::Update, None));
        manager.broadcast(&envelope);

        match rx.recv().await {
            Some(Envelope::Change { table, .. }) => assert_eq!(table, ChangeTable::TimeSlots),
            other => panic!("expected change envelope, got {other:?}"),
        }

        manager.unregister(&handle.id);
        assert_eq!(manager.connection_count(), 0);
    }

    #[tokio::test]
    async fn test_full_queue_does_not_block_broadcast() {
        let manager = ConnectionManager::new(1);
        let (_handle, _rx) = manager.register("+911234567890");

        let envelope =
            Envelope::from(ChangeEvent::now(ChangeTable::Bookings, ChangeOp::Insert, None));
        manager.broadcast(&envelope);
        // Queue is now full; a second broadcast must not block.
        manager.broadcast(&envelope);
    }
}
