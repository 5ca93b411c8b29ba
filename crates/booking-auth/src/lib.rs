//! # booking-auth
//!
//! Session identity for the booking backend: self-contained JWT
//! credentials binding a verified phone number, and the client for the
//! phone-verification (OTP) provider.

pub mod jwt;
pub mod phone;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use phone::{PhoneVerifier, VerifiedPhone};
