//! # booking-core
//!
//! Core crate for the paintball slot-booking backend. Contains configuration
//! schemas, change-feed events, and the unified error system.
//!
//! This crate has **no** internal dependencies on other booking crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
