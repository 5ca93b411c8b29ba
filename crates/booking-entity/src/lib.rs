//! # booking-entity
//!
//! Persisted models for the booking backend: users, time slots, and
//! bookings, plus the closed `Club` and `Gender` enumerations.

pub mod booking;
pub mod slot;
pub mod user;

pub use booking::{Booking, Club};
pub use booking::model::BookingWithUser;
pub use slot::{SLOT_CAPACITY, TimeSlot};
pub use user::{Gender, User};
