//! JWT token validation.
//!
//! Verification is self-contained (HMAC signature + expiry); no network
//! round-trip to the identity provider is needed.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use booking_core::config::auth::AuthConfig;
use booking_core::error::AppError;

use super::claims::Claims;

/// Validates session tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.required_spec_claims.insert("exp".to_string());

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Verifies a token and returns its claims.
    ///
    /// Any failure (bad signature, malformed token, expired) maps to an
    /// authentication error; the caller sees 401.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::authentication(format!("Invalid session token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use booking_core::config::auth::AuthConfig;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_hours: 24,
            provider_timeout_seconds: 5,
        }
    }

    #[test]
    fn test_issue_then_verify() {
        let cfg = config();
        let (token, issued) = JwtEncoder::new(&cfg).issue("+911234567890").unwrap();
        let claims = JwtDecoder::new(&cfg).verify(&token).unwrap();
        assert_eq!(claims.phone(), "+911234567890");
        assert_eq!(claims.jti, issued.jti);
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let (token, _) = JwtEncoder::new(&config()).issue("+911234567890").unwrap();
        let mut other = config();
        other.jwt_secret = "different-secret".to_string();
        assert!(JwtDecoder::new(&other).verify(&token).is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(JwtDecoder::new(&config()).verify("not.a.jwt").is_err());
    }
}
