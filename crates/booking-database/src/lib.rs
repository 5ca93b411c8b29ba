//! # booking-database
//!
//! PostgreSQL access for the booking backend: connection pool management,
//! embedded migrations, one-shot slot seeding, and the repositories. The
//! seat allocator transaction lives in [`repositories::booking`].

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;
