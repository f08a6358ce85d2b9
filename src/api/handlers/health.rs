//! Health check endpoint handlers.
//!
//! Health checks directly access the two connection pools rather than
//! going through the service layer, so a broken pool is reported even
//! when no table has been touched yet.

use std::collections::HashMap;

use axum::{Router, extract::State, http::StatusCode, response::Json, routing::get};
use diesel_async::RunQueryDsl;

use crate::api::dto::{ComponentHealth, HealthResponse, HealthStatus};
use crate::db::AsyncDbPool;
use crate::state::AppState;

/// Creates health check routes.
///
/// # Routes
/// - `GET /health` - Basic health check
/// - `GET /health/ready` - Readiness probe
/// - `GET /health/live` - Liveness probe
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .route("/health/live", get(liveness_check))
}

/// Basic health check endpoint.
///
/// Reports connectivity for both stores under `primary_database` and
/// `secondary_database` keys.
///
/// # Responses
/// - `200 OK` - Both stores reachable
/// - `503 Service Unavailable` - Either store unreachable
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, StatusCode> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    let primary = check_pool(&state.primary_pool).await;
    if matches!(primary.status, HealthStatus::Unhealthy) {
        overall_status = HealthStatus::Unhealthy;
    }
    checks.insert("primary_database".to_string(), primary);

    let secondary = check_pool(&state.secondary_pool).await;
    if matches!(secondary.status, HealthStatus::Unhealthy) {
        overall_status = HealthStatus::Unhealthy;
    }
    checks.insert("secondary_database".to_string(), secondary);

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks,
    };

    match response.status {
        HealthStatus::Healthy | HealthStatus::Degraded => Ok(Json(response)),
        HealthStatus::Unhealthy => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}

/// Readiness probe endpoint.
///
/// Ready only when both stores are reachable.
pub async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    let primary = check_pool(&state.primary_pool).await;
    let secondary = check_pool(&state.secondary_pool).await;

    match (primary.status, secondary.status) {
        (HealthStatus::Healthy, HealthStatus::Healthy) => StatusCode::OK,
        _ => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Liveness probe endpoint.
///
/// Lightweight check that does not touch external dependencies.
pub async fn liveness_check() -> StatusCode {
    // If we can respond, we're alive
    StatusCode::OK
}

/// Check one pool by borrowing a connection and running a trivial query.
async fn check_pool(pool: &AsyncDbPool) -> ComponentHealth {
    let start_time = std::time::Instant::now();

    match pool.get().await {
        Ok(mut conn) => match diesel::sql_query("SELECT 1").execute(&mut conn).await {
            Ok(_) => ComponentHealth {
                status: HealthStatus::Healthy,
                message: Some("Connected".to_string()),
                response_time_ms: Some(start_time.elapsed().as_millis() as u64),
            },
            Err(e) => ComponentHealth {
                status: HealthStatus::Unhealthy,
                message: Some(format!("Query failed: {}", e)),
                response_time_ms: Some(start_time.elapsed().as_millis() as u64),
            },
        },
        Err(e) => ComponentHealth {
            status: HealthStatus::Unhealthy,
            message: Some(format!("Connection failed: {}", e)),
            response_time_ms: Some(start_time.elapsed().as_millis() as u64),
        },
    }
}
