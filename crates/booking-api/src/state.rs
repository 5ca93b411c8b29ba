//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use booking_auth::jwt::decoder::JwtDecoder;
use booking_auth::jwt::encoder::JwtEncoder;
use booking_auth::phone::provider::PhoneVerifier;
use booking_core::config::AppConfig;
use booking_database::repositories::booking::BookingRepository;
use booking_database::repositories::time_slot::TimeSlotRepository;
use booking_database::repositories::user::UserRepository;
use booking_realtime::connection::ConnectionManager;
use booking_realtime::feed::ChangeFeed;

use crate::middleware::rate_limit::RateLimiter;
use crate::services::booking::BookingService;
use crate::services::registration::RegistrationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Phone-verification provider client.
    pub phone_verifier: Arc<PhoneVerifier>,

    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Slot catalog repository.
    pub slot_repo: Arc<TimeSlotRepository>,
    /// Booking ledger repository (holds the seat allocator).
    pub booking_repo: Arc<BookingRepository>,

    /// Registration orchestration.
    pub registration_service: Arc<RegistrationService>,
    /// Seat allocation orchestration.
    pub booking_service: Arc<BookingService>,

    /// Change feed for committed writes.
    pub change_feed: Arc<ChangeFeed>,
    /// WebSocket connection registry.
    pub connections: Arc<ConnectionManager>,

    /// Token-bucket rate limiter.
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Build the full state graph from configuration and a connected pool.
    pub fn build(config: AppConfig, db_pool: PgPool) -> Result<Self, booking_core::AppError> {
        let config = Arc::new(config);

        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let phone_verifier = Arc::new(PhoneVerifier::new(&config.auth)?);

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let slot_repo = Arc::new(TimeSlotRepository::new(db_pool.clone()));
        let booking_repo = Arc::new(BookingRepository::new(db_pool.clone()));

        let change_feed = Arc::new(ChangeFeed::new(config.realtime.feed_buffer));
        let connections = Arc::new(ConnectionManager::new(config.realtime.outbound_buffer));

        let registration_service = Arc::new(RegistrationService::new(user_repo.clone()));
        let booking_service = Arc::new(BookingService::new(
            user_repo.clone(),
            booking_repo.clone(),
            change_feed.clone(),
            config.booking.duplicate_policy,
        ));

        let rate_limiter = Arc::new(RateLimiter::new(
            config.rate_limit.max_tokens,
            config.rate_limit.refill_rate,
        ));

        Ok(Self {
            config,
            db_pool,
            jwt_encoder,
            jwt_decoder,
            phone_verifier,
            user_repo,
            slot_repo,
            booking_repo,
            registration_service,
            booking_service,
            change_feed,
            connections,
            rate_limiter,
        })
    }
}
