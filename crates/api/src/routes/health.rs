use axum::extract::State;
use axum::{routing::get, Json, Router};
use inventory_core::rpc::HealthStatus;

use crate::handlers;
use crate::state::AppState;

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(handlers::health::status(&state.pool).await)
}

/// Mount health check routes (intended for root-level, NOT under `/rpc`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
