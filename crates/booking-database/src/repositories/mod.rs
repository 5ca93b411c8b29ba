//! Repository implementations.

pub mod booking;
pub mod time_slot;
pub mod user;

pub use booking::{AllocationOutcome, BookingRepository};
pub use time_slot::TimeSlotRepository;
pub use user::UserRepository;
