//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点

use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use metrics_exporter_prometheus::PrometheusHandle;
use pfs_adapter_postgres::probe;
use pfs_common::HealthReport;
use serde::Serialize;
use sqlx::PgPool;

/// 健康检查端点共享状态
#[derive(Clone)]
pub struct HealthState {
    pool: PgPool,
    metrics: Option<PrometheusHandle>,
    probe_timeout: Duration,
}

impl HealthState {
    pub fn new(pool: PgPool, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            pool,
            metrics,
            probe_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }
}

#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: String,
    pub version: String,
}

/// 健康检查路由
pub fn health_routes(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route("/ready", get(readiness))
        .route("/metrics", get(render_metrics))
        .with_state(state)
}

/// 存活检查：只检查进程是否在运行
async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// 就绪检查：检查数据库是否可用
async fn readiness(State(state): State<HealthState>) -> impl IntoResponse {
    let mut report = HealthReport::new();
    report.add_check(probe(&state.pool, state.probe_timeout).await);

    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(report))
}

async fn render_metrics(State(state): State<HealthState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::NOT_FOUND,
            "metrics recorder not installed".to_string(),
        ),
    }
}
