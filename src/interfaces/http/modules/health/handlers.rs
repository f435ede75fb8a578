//! Health check handler

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::FlowService;

/// Health check state
#[derive(Clone)]
pub struct HealthState {
    pub service: Arc<FlowService>,
    pub started_at: Arc<Instant>,
}

/// Service health response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub database: ComponentHealth,
}

/// Component health status
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    pub status: String,
    pub latency_ms: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Flow store is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let uptime = state.started_at.elapsed().as_secs();

    // Ping the flow store
    let db_start = Instant::now();
    let db_health = match state.service.ping().await {
        Ok(()) => ComponentHealth {
            status: "ok".to_string(),
            latency_ms: Some(db_start.elapsed().as_millis() as u64),
        },
        Err(e) => {
            tracing::warn!("Health check: flow store ping failed: {}", e);
            ComponentHealth {
                status: "error".to_string(),
                latency_ms: None,
            }
        }
    };

    let (overall_status, http_status) = if db_health.status == "ok" {
        ("ok", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    (
        http_status,
        Json(HealthResponse {
            status: overall_status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: uptime,
            database: db_health,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryFlowRepository;

    fn state(repo: InMemoryFlowRepository) -> HealthState {
        HealthState {
            service: Arc::new(FlowService::new(Arc::new(repo))),
            started_at: Arc::new(Instant::now()),
        }
    }

    #[tokio::test]
    async fn healthy_store() {
        let (status, Json(body)) = health_check(State(state(InMemoryFlowRepository::new()))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.database.status, "ok");
        assert!(body.database.latency_ms.is_some());
    }

    #[tokio::test]
    async fn unreachable_store_is_degraded() {
        let (status, Json(body)) =
            health_check(State(state(InMemoryFlowRepository::unavailable()))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert!(body.database.latency_ms.is_none());
    }
}
