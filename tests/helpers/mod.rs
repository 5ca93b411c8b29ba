//! Shared test helpers for integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

use booking_api::state::AppState;
use booking_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
    /// Shared state for direct access to repositories and the feed
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application.
    ///
    /// The pool connects lazily, so tests that never touch the database
    /// run without one.
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect_lazy(&config.database.url)
            .expect("Invalid test database URL");

        let state =
            AppState::build(config.clone(), db_pool.clone()).expect("Failed to build app state");
        let router = booking_api::router::build_router(state.clone());

        Self {
            router,
            db_pool,
            config,
            state,
        }
    }

    /// Create a test application against a live database: runs migrations
    /// and wipes all rows.
    pub async fn with_db() -> Self {
        let app = Self::new().await;

        booking_database::migration::run_migrations(&app.db_pool)
            .await
            .expect("Failed to run migrations");

        app.clean_database().await;
        app
    }

    /// Clean all test data from the database
    async fn clean_database(&self) {
        for table in ["bookings", "time_slots", "users"] {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(&self.db_pool).await;
        }
    }

    /// Issue a session token for a phone number, bypassing the provider.
    pub fn token_for(&self, phone: &str) -> String {
        let (token, _claims) = self
            .state
            .jwt_encoder
            .issue(phone)
            .expect("Failed to issue test token");
        token
    }

    /// Create a registered user and return their ID
    pub async fn create_test_user(&self, phone: &str, name: &str, scholar_number: &str) -> Uuid {
        sqlx::query_scalar(
            r#"INSERT INTO users (phone, name, scholar_number, gender)
               VALUES ($1, $2, $3, 'male'::gender) RETURNING id"#,
        )
        .bind(phone)
        .bind(name)
        .bind(scholar_number)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to create test user")
    }

    /// Create a slot with the given occupancy counters and return its ID
    pub async fn create_test_slot(&self, xploit: i16, ecell: i16) -> Uuid {
        sqlx::query_scalar(
            r#"INSERT INTO time_slots (start_time, end_time, slot_name, xploit_bookings, ecell_bookings)
               VALUES (NOW(), NOW() + INTERVAL '10 minutes', '10:00 AM - 10:10 AM', $1, $2)
               RETURNING id"#,
        )
        .bind(xploit)
        .bind(ecell)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to create test slot")
    }

    /// Read a slot's occupancy counters
    pub async fn slot_counters(&self, slot_id: Uuid) -> (i16, i16) {
        sqlx::query_as(
            "SELECT xploit_bookings, ecell_bookings FROM time_slots WHERE id = $1",
        )
        .bind(slot_id)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to read slot counters")
    }

    /// Count booking rows for a slot
    pub async fn booking_rows(&self, slot_id: Uuid) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE time_slot_id = $1")
            .bind(slot_id)
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to count bookings")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a raw request to the test app
    pub async fn send(&self, mut req: Request<Body>) -> TestResponse {
        // `oneshot` bypasses hyper's connection layer, so requests lack the
        // `OnUpgrade` extension a real HTTP/1.1 connection carries; insert a
        // placeholder so upgrade handlers behave as they would in production.
        let on_upgrade = hyper::upgrade::on(&mut req);
        req.extensions_mut().insert(on_upgrade);

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
