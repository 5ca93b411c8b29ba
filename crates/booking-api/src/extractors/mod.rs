//! Request extractors.

pub mod auth;
pub mod json;

pub use auth::AuthSession;
pub use json::ApiJson;
