//! Phone-verification provider integration.

pub mod provider;

pub use provider::{PhoneVerifier, VerifiedPhone};
