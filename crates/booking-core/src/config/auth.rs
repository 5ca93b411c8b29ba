//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token TTL in hours. The credential binds a verified phone
    /// number and must expire.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Request timeout in seconds when fetching the phone-verification
    /// provider's user payload.
    #[serde(default = "default_provider_timeout")]
    pub provider_timeout_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl(),
            provider_timeout_seconds: default_provider_timeout(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    24
}

fn default_provider_timeout() -> u64 {
    10
}
