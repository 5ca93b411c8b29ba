//! Booking entity.

pub mod club;
pub mod model;

pub use club::Club;
pub use model::{Booking, BookingWithUser};
