//! Request handlers.

pub mod auth;
pub mod booking;
pub mod health;
pub mod slot;
pub mod user;
pub mod ws;
