//! User entity.

pub mod gender;
pub mod model;

pub use gender::Gender;
pub use model::{CreateUser, User};
