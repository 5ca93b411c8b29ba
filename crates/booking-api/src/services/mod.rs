//! Orchestration services between handlers and repositories.

pub mod booking;
pub mod registration;

pub use booking::BookingService;
pub use registration::RegistrationService;
