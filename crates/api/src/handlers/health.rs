use inventory_core::rpc::HealthStatus;
use inventory_db::DbPool;

/// Service and database health, shared by `/health` and `healthcheck`.
pub async fn status(pool: &DbPool) -> HealthStatus {
    let db_healthy = inventory_db::health_check(pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    HealthStatus {
        status: status.to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        db_healthy,
    }
}
