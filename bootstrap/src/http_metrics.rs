//! Metrics 模块
//!
//! HTTP 请求与连接池指标

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, gauge, histogram};
use pfs_adapter_postgres::PoolStatus;

/// 记录 HTTP 请求
pub fn record_http_request(method: &str, route: &str, status: u16, duration_ms: f64) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_ms", &labels).record(duration_ms);
}

/// 记录连接池状态
pub fn record_pool_status(pool_name: &str, status: &PoolStatus) {
    let labels = [("pool", pool_name.to_string())];
    gauge!("connection_pool_size", &labels).set(status.size as f64);
    gauge!("connection_pool_idle", &labels).set(status.idle as f64);
    gauge!("connection_pool_active", &labels).set(status.active as f64);
}

/// HTTP 指标中间件
///
/// 需要以 `route_layer` 挂载，才能拿到匹配的路由模板
pub async fn track_http_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    record_http_request(
        &method,
        &route,
        response.status().as_u16(),
        start.elapsed().as_secs_f64() * 1000.0,
    );

    response
}
