//! 健康检查模块
//!
//! 提供 /health、/ready 与 /metrics 端点

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;

/// 健康检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// 组件健康状态
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub healthy: bool,
}

/// 就绪检查结果
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessStatus {
    pub ready: bool,
    pub checks: Vec<ComponentHealth>,
}

impl ReadinessStatus {
    pub fn from_checks(checks: Vec<ComponentHealth>) -> Self {
        Self {
            ready: checks.iter().all(|c| c.healthy),
            checks,
        }
    }
}

/// 健康检查路由
///
/// `components` 为就绪检查中上报的组件名，内存存储在构造完成后即可用
pub fn health_routes(components: &[&str]) -> Router {
    let readiness = ReadinessStatus::from_checks(
        components
            .iter()
            .map(|name| ComponentHealth {
                name: name.to_string(),
                healthy: true,
            })
            .collect(),
    );

    Router::new()
        .route("/health", get(|| async { Json(HealthStatus::healthy()) }))
        .route(
            "/ready",
            get(move || {
                let readiness = readiness.clone();
                async move { Json(readiness) }
            }),
        )
}

/// Prometheus metrics 路由
pub fn metrics_routes(handle: PrometheusHandle) -> Router {
    Router::new()
        .route("/metrics", get(render_metrics))
        .with_state(handle)
}

async fn render_metrics(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = health_routes(&["catalog"]);
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_lists_components() {
        let app = health_routes(&["catalog", "customers"]);
        let response = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["ready"], true);
        assert_eq!(body["checks"].as_array().unwrap().len(), 2);
    }
}
