//! Client for the phone-OTP provider.
//!
//! After the browser completes the provider's OTP flow, the provider hands
//! it a one-time URL to a JSON blob describing the verified user. The
//! server fetches that blob and trusts only its contents, never fields the
//! client typed in.

use serde::Deserialize;
use tracing::info;

use booking_core::config::auth::AuthConfig;
use booking_core::error::AppError;

/// The provider's verified-user payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderPayload {
    /// Country dialing code, e.g. `"+91"`.
    pub user_country_code: String,
    /// National phone number.
    pub user_phone_number: String,
    /// First name, when the provider has it.
    #[serde(default)]
    pub user_first_name: Option<String>,
    /// Last name, when the provider has it.
    #[serde(default)]
    pub user_last_name: Option<String>,
}

/// A phone number the provider has verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedPhone {
    /// Full phone number (country code + national number).
    pub phone: String,
    /// Display name assembled from the provider payload, when present.
    pub name: Option<String>,
}

impl From<ProviderPayload> for VerifiedPhone {
    fn from(payload: ProviderPayload) -> Self {
        let phone = format!("{}{}", payload.user_country_code, payload.user_phone_number);
        let name = payload.user_first_name.map(|first| {
            match payload.user_last_name {
                Some(last) => format!("{first} {last}").trim().to_string(),
                None => first,
            }
        });
        Self { phone, name }
    }
}

/// Fetches and parses the provider's verified-user payload.
#[derive(Debug, Clone)]
pub struct PhoneVerifier {
    client: reqwest::Client,
}

impl PhoneVerifier {
    /// Creates a new verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.provider_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::internal(format!("Failed to build provider HTTP client: {e}"))
            })?;
        Ok(Self { client })
    }

    /// Resolves the provider's user-JSON URL into a verified phone.
    pub async fn resolve(&self, user_json_url: &str) -> Result<VerifiedPhone, AppError> {
        let response = self
            .client
            .get(user_json_url)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(format!("Phone provider request failed: {e}"))
            })?;

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Phone provider returned status {}",
                response.status()
            )));
        }

        let payload: ProviderPayload = response.json().await.map_err(|e| {
            AppError::external_service(format!("Malformed phone provider payload: {e}"))
        })?;

        let verified = VerifiedPhone::from(payload);
        info!(phone = %verified.phone, "Phone verified");
        Ok(verified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_concatenates_country_code() {
        let payload = ProviderPayload {
            user_country_code: "+91".to_string(),
            user_phone_number: "1234567890".to_string(),
            user_first_name: Some("Asha".to_string()),
            user_last_name: Some("Rao".to_string()),
        };
        let verified = VerifiedPhone::from(payload);
        assert_eq!(verified.phone, "+911234567890");
        assert_eq!(verified.name.as_deref(), Some("Asha Rao"));
    }

    #[test]
    fn test_name_is_optional() {
        let payload = ProviderPayload {
            user_country_code: "+91".to_string(),
            user_phone_number: "1234567890".to_string(),
            user_first_name: None,
            user_last_name: None,
        };
        assert_eq!(VerifiedPhone::from(payload).name, None);
    }
}
