//! # booking-realtime
//!
//! The occupancy notifier: an in-process change feed publishing committed
//! table changes in commit order, and a WebSocket connection registry that
//! fans events out to subscribed clients. Events are invalidation signals;
//! subscribers re-fetch the slot catalog rather than applying deltas.

pub mod connection;
pub mod feed;
pub mod message;

pub use connection::ConnectionManager;
pub use feed::ChangeFeed;
pub use message::Envelope;
