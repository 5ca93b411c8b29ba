//! User repository implementation.

use sqlx::PgPool;

use booking_core::error::{AppError, ErrorKind};
use booking_core::result::AppResult;
use booking_entity::user::model::CreateUser;
use booking_entity::user::User;

/// Unique-violation SQLSTATE code.
const UNIQUE_VIOLATION: &str = "23505";

/// Repository for user registration and lookup.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by phone number.
    pub async fn find_by_phone(&self, phone: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE phone = $1")
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by phone", e)
            })
    }

    /// Register a new user.
    ///
    /// A duplicate phone or scholar number surfaces as a `Conflict` so the
    /// client can render an actionable message.
    pub async fn create(&self, user: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (phone, name, scholar_number, gender) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&user.phone)
        .bind(&user.name)
        .bind(&user.scholar_number)
        .bind(user.gender)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                AppError::conflict("Phone or scholar number already registered")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }
}
