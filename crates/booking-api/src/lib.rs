//! # booking-api
//!
//! HTTP surface of the booking backend: router, handlers, DTOs,
//! middleware, the bearer-token extractor, and the WebSocket upgrade for
//! the occupancy feed.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod services;
pub mod state;

pub use router::build_router;
pub use state::AppState;
