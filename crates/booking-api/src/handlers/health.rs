//! Health probes.

use axum::Json;
use axum::extract::State;

use booking_core::error::{AppError, ErrorKind};

use crate::dto::response::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health — liveness.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /api/health/db — database connectivity.
pub async fn health_db(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}
