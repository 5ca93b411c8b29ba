//! Token bucket rate limiter middleware.
//!
//! Buckets live in this instance's memory. Multi-instance deployments
//! need a shared-store limiter in front; this layer is independent of the
//! allocator's atomicity guarantee and never substitutes for it.

use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use dashmap::DashMap;

use booking_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Per-client token buckets, sharded by key.
#[derive(Debug)]
pub struct RateLimiter {
    buckets: DashMap<String, Bucket>,
    capacity: f64,
    refill_per_second: f64,
}

#[derive(Debug)]
struct Bucket {
    level: f64,
    touched: Instant,
}

impl RateLimiter {
    /// Creates a new rate limiter.
    pub fn new(max_tokens: u32, refill_rate: f64) -> Self {
        Self {
            buckets: DashMap::new(),
            capacity: max_tokens as f64,
            refill_per_second: refill_rate,
        }
    }

    /// Take one token from the client's bucket.
    ///
    /// `false` means the bucket is empty and the request must be rejected.
    /// New clients start with a full bucket.
    pub fn try_acquire(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut bucket = self
            .buckets
            .entry(key.to_string())
            .or_insert_with(|| Bucket {
                level: self.capacity,
                touched: now,
            });

        let idle = now.saturating_duration_since(bucket.touched).as_secs_f64();
        bucket.level = (bucket.level + idle * self.refill_per_second).min(self.capacity);
        bucket.touched = now;

        if bucket.level < 1.0 {
            return false;
        }
        bucket.level -= 1.0;
        true
    }
}

/// Extract the client key: first hop of `X-Forwarded-For`, or `"unknown"`.
fn client_key(req: &Request) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Middleware rejecting clients that exhausted their bucket.
pub async fn rate_limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if !state.config.rate_limit.enabled {
        return next.run(req).await;
    }

    let key = client_key(&req);
    if !state.rate_limiter.try_acquire(&key) {
        return ApiError(AppError::new(
            booking_core::error::ErrorKind::RateLimit,
            "Too many requests. Please try again shortly.",
        ))
        .into_response();
    }

    next.run(req).await
}
