//! Registration orchestration.

use std::sync::Arc;

use tracing::info;

use booking_core::result::AppResult;
use booking_database::repositories::user::UserRepository;
use booking_entity::user::model::CreateUser;
use booking_entity::user::{Gender, User};

/// Creates user records for verified phone numbers.
#[derive(Debug)]
pub struct RegistrationService {
    users: Arc<UserRepository>,
}

impl RegistrationService {
    /// Create a new registration service.
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self { users }
    }

    /// Register a participant under their verified phone number.
    ///
    /// Duplicate phone or scholar number surfaces as a conflict.
    pub async fn register(
        &self,
        phone: &str,
        name: &str,
        scholar_number: &str,
        gender: Gender,
    ) -> AppResult<User> {
        let user = self
            .users
            .create(&CreateUser {
                phone: phone.to_string(),
                name: name.to_string(),
                scholar_number: scholar_number.to_string(),
                gender,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Look up the profile for a verified phone number.
    pub async fn profile(&self, phone: &str) -> AppResult<Option<User>> {
        self.users.find_by_phone(phone).await
    }
}
