//! Liveness and readiness endpoints

use std::time::Duration;

use axum::{extract::State, http::StatusCode, Json};
use logins_service::dto::{HealthResponse, ReadinessResponse};
use tracing::warn;

use crate::state::AppState;

/// Upper bound on the readiness round trip
const READINESS_TIMEOUT: Duration = Duration::from_secs(2);

/// GET /health
///
/// Answers without touching the database.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// GET /health/ready
///
/// 503 unless `SELECT 1` succeeds within [`READINESS_TIMEOUT`].
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let pool = state.service_context().pool();

    let database_up = match tokio::time::timeout(READINESS_TIMEOUT, logins_db::ping(pool)).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            warn!(error = %e, "readiness: database ping failed");
            false
        }
        Err(_) => {
            warn!(timeout_ms = READINESS_TIMEOUT.as_millis(), "readiness: database ping timed out");
            false
        }
    };

    let body = ReadinessResponse::ready(database_up);
    let status = if body.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(body))
}
