//! Wire envelope for feed events sent to WebSocket clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use booking_core::events::{ChangeEvent, ChangeOp, ChangeTable};

/// The serialized message delivered over a WebSocket connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Envelope {
    /// A committed table change; the client should re-fetch the catalog.
    Change {
        /// Table that changed.
        table: ChangeTable,
        /// Kind of write.
        op: ChangeOp,
        /// Affected row, when known.
        row_id: Option<Uuid>,
        /// Commit-side timestamp.
        at: DateTime<Utc>,
    },
    /// Greeting sent when the connection is established.
    Connected {
        /// Server-assigned connection id.
        connection_id: Uuid,
    },
}

impl From<ChangeEvent> for Envelope {
    fn from(event: ChangeEvent) -> Self {
        Self::Change {
            table: event.table,
            op: event.op,
            row_id: event.row_id,
            at: event.at,
        }
    }
}

impl Envelope {
    /// Serialize to the JSON text frame sent on the socket.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_envelope_shape() {
        let envelope: Envelope =
            ChangeEvent::now(ChangeTable::Bookings, ChangeOp::Insert, None).into();
        let json: serde_json::Value = serde_json::from_str(&envelope.to_json()).unwrap();
        assert_eq!(json["type"], "change");
        assert_eq!(json["table"], "bookings");
        assert_eq!(json["op"], "insert");
    }
}
