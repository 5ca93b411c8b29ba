//! WebSocket upgrade handler for the occupancy feed.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

use booking_realtime::message::Envelope;

/// Query parameter for WebSocket authentication.
#[derive(Debug, serde::Deserialize)]
pub struct WsQuery {
    /// JWT session token.
    pub token: String,
}

/// GET /ws?token={jwt} — WebSocket upgrade.
///
/// The credential is verified before the upgrade; an invalid token never
/// reaches the socket layer.
pub async fn ws_upgrade(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
) -> Result<Response, ApiError> {
    let claims = state.jwt_decoder.verify(&query.token)?;

    Ok(ws.on_upgrade(move |socket| handle_ws_connection(state, claims.sub, socket)))
}

/// Handles an established WebSocket connection.
async fn handle_ws_connection(state: AppState, phone: String, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    let (handle, mut outbound_rx) = state.connections.register(&phone);
    let conn_id = handle.id;

    info!(conn_id = %conn_id, "WebSocket connection established");

    let greeting = Envelope::Connected {
        connection_id: conn_id,
    };
    if ws_tx
        .send(Message::Text(greeting.to_json().into()))
        .await
        .is_err()
    {
        state.connections.unregister(&conn_id);
        return;
    }

    // Forward queued feed envelopes to the socket.
    let outbound_task = tokio::spawn(async move {
        while let Some(envelope) = outbound_rx.recv().await {
            if ws_tx
                .send(Message::Text(envelope.to_json().into()))
                .await
                .is_err()
            {
                break;
            }
        }
    });

    // Inbound messages are ignored; the feed is one-way. The loop exists
    // to observe Close and connection errors.
    while let Some(result) = ws_rx.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                debug!(conn_id = %conn_id, error = %e, "WebSocket error");
                break;
            }
        }
    }

    outbound_task.abort();
    state.connections.unregister(&conn_id);
    info!(conn_id = %conn_id, "WebSocket connection closed");
}
