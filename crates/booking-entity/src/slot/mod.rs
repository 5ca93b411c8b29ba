//! Time slot entity.

pub mod model;

pub use model::{SLOT_CAPACITY, TimeSlot};
