use crate::models::HealthStatus;
use crate::routes;
use axum::Json;
use chrono::Utc;

/// `/health` handler - Liveness check
///
/// Always reports "ok" with the current timestamp. Store reachability
/// does not factor in; only the set/get endpoints depend on the store.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    ),
    tag = "health"
)]
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
