//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::FromRef, middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::FlowService;
use crate::config::AppConfig;

use super::modules::flows::{self, FlowHandlerState};
use super::modules::health::{self, HealthState};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::request_id::request_id_middleware;

/// Unified router state. Axum extracts each handler's own state via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub flow_service: Arc<FlowService>,
    pub default_page_size: u32,
    pub started_at: Arc<Instant>,
    pub prometheus: PrometheusHandle,
}

impl FromRef<AppState> for FlowHandlerState {
    fn from_ref(s: &AppState) -> Self {
        FlowHandlerState {
            service: Arc::clone(&s.flow_service),
            default_page_size: s.default_page_size,
        }
    }
}

impl FromRef<AppState> for HealthState {
    fn from_ref(s: &AppState) -> Self {
        HealthState {
            service: Arc::clone(&s.flow_service),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<AppState> for MetricsState {
    fn from_ref(s: &AppState) -> Self {
        MetricsState {
            handle: s.prometheus.clone(),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        flows::list_flows,
    ),
    tags(
        (name = "Flows", description = "Captured network flows"),
        (name = "Health", description = "Service health"),
    ),
    info(
        title = "Flow API",
        description = "Read-only paginated access to captured network flows",
    )
)]
pub struct ApiDoc;

/// Create the API router
pub fn create_api_router(
    flow_service: Arc<FlowService>,
    app_cfg: &AppConfig,
    prometheus: PrometheusHandle,
) -> Router {
    let state = AppState {
        flow_service,
        default_page_size: app_cfg.pagination.default_size,
        started_at: Arc::new(Instant::now()),
        prometheus,
    };

    // CORS configuration: the flow UI is served from its own origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());

    Router::new()
        // Flows
        .route("/flows/", get(flows::list_flows))
        .route("/flows", get(flows::list_flows))
        // Health
        .route("/health", get(health::health_check))
        // Metrics
        .route("/metrics", get(prometheus_metrics))
        .route_layer(middleware::from_fn(http_metrics_middleware))
        .with_state(state)
        // Swagger UI
        .merge(swagger_routes)
        // Middleware
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::domain::{FlowRecord, NdpiInfo};
    use crate::infrastructure::InMemoryFlowRepository;

    fn flow(i: i64) -> FlowRecord {
        let ndpi = if i % 2 == 0 {
            NdpiInfo::new(Some("HTTP"), Some("Web"))
        } else {
            NdpiInfo::default()
        };
        FlowRecord::new(1_700_000_000 + i, format!("10.0.0.{}", i), "192.168.0.1", ndpi)
    }

    fn router_with(repo: InMemoryFlowRepository) -> Router {
        let service = Arc::new(FlowService::new(Arc::new(repo)));
        let handle = PrometheusBuilder::new().build_recorder().handle();
        create_api_router(service, &AppConfig::default(), handle)
    }

    fn router(rows: i64) -> Router {
        router_with(InMemoryFlowRepository::with_flows((0..rows).map(flow).collect()))
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
        let resp = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn second_page_of_ten_over_25_rows() {
        let (status, body) = get(router(25), "/flows/?page=2&size=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"], json!({"page": 2, "size": 10}));

        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 10);
        assert_eq!(results[0]["src_ip"], "10.0.0.10");
        assert_eq!(results[9]["src_ip"], "10.0.0.19");
    }

    #[tokio::test]
    async fn defaults_when_params_omitted() {
        let (status, body) = get(router(60), "/flows/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"], json!({"page": 1, "size": 50}));
        assert_eq!(body["results"].as_array().unwrap().len(), 50);
    }

    #[tokio::test]
    async fn route_without_trailing_slash() {
        let (status, body) = get(router(3), "/flows?size=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn last_page_is_short_and_past_end_is_empty() {
        let (_, body) = get(router(25), "/flows/?page=3&size=10").await;
        assert_eq!(body["results"].as_array().unwrap().len(), 5);

        let (status, body) = get(router(25), "/flows/?page=9&size=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"], json!([]));
        assert_eq!(body["pagination"], json!({"page": 9, "size": 10}));
    }

    #[tokio::test]
    async fn ndpi_fields_map_to_view() {
        let (_, body) = get(router(2), "/flows/").await;
        assert_eq!(
            body["results"][0],
            json!({
                "src_ip": "10.0.0.0",
                "dst_ip": "192.168.0.1",
                "last_seen": 1_700_000_000,
                "ndpi_proto": "HTTP",
                "ndpi_category": "Web"
            })
        );
        assert!(body["results"][1]["ndpi_proto"].is_null());
        assert!(body["results"][1]["ndpi_category"].is_null());
    }

    #[tokio::test]
    async fn invalid_params_are_unprocessable() {
        for uri in ["/flows/?page=0", "/flows/?size=0", "/flows/?size=101"] {
            let (status, body) = get(router(5), uri).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
            assert_eq!(body["success"], false);
            assert!(body["details"].as_array().is_some_and(|d| !d.is_empty()));
        }
    }

    #[tokio::test]
    async fn store_failure_is_opaque_500() {
        let (status, body) = get(router_with(InMemoryFlowRepository::unavailable()), "/flows/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (status, body) = get(router(0), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn metrics_endpoint_is_text() {
        let resp = router(0)
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
    }

    #[tokio::test]
    async fn openapi_document_lists_flows() {
        let (status, body) = get(router(0), "/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/flows/"]["get"].is_object());
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let resp = router(1)
            .oneshot(Request::builder().uri("/flows/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(resp.headers().contains_key("x-request-id"));
    }
}
