//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;

use axum::{Router, http::HeaderValue, middleware};
use metrics_exporter_prometheus::PrometheusHandle;
use pfs_config::{AppConfig, ServerConfig};
use pfs_errors::AppResult;
use pfs_telemetry::init_metrics;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::health::{HealthState, health_routes};
use crate::infrastructure::Infrastructure;
use crate::http_metrics::{record_pool_status, track_http_metrics};
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 HTTP 服务
///
/// 所有服务的统一入口点：
/// 1. 加载配置并初始化运行时（日志）
/// 2. 安装 Prometheus 记录器
/// 3. 创建基础设施资源（数据库连接池，带重试）
/// 4. 调用用户提供的闭包构建业务路由
/// 5. 挂载健康检查与中间件，启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use pfs_bootstrap::run_http;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_http("config", |infra| async move {
///         Ok(my_routes(infra.postgres_pool()))
///     })
///     .await
/// }
/// ```
pub async fn run_http<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    let config = AppConfig::load(config_dir)?;

    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    let metrics_handle = install_metrics();

    let infra = Infrastructure::from_config(&config).await?;
    record_pool_status("postgres", &infra.pool_status());

    let health = HealthState::new(infra.postgres_pool(), metrics_handle);
    let api = router_builder(infra.clone()).await?;
    let app = build_app(api, health, &config.server);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!(%addr, "HTTP server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    infra.postgres_pool().close().await;

    info!("Service stopped");

    Ok(())
}

/// 组装完整应用：业务路由 + 健康检查 + 中间件
pub fn build_app(api: Router, health: HealthState, server: &ServerConfig) -> Router {
    api.merge(health_routes(health))
        .route_layer(middleware::from_fn(track_http_metrics))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// 未配置来源时放开 CORS
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

fn install_metrics() -> Option<PrometheusHandle> {
    match init_metrics() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!(error = %e, "Prometheus recorder not installed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use sqlx::postgres::PgPoolOptions;
    use std::time::Duration;
    use tower::ServiceExt;

    fn server_config(origins: Vec<String>) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 5,
            cors_allowed_origins: origins,
        }
    }

    fn health_state() -> HealthState {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(200))
            .connect_lazy("postgres://nobody@127.0.0.1:1/none")
            .expect("lazy pool");
        HealthState::new(pool, None)
    }

    #[tokio::test]
    async fn test_build_app_serves_api_and_health() {
        let api = Router::new().route("/api/ping", get(|| async { "pong" }));
        let app = build_app(api, health_state(), &server_config(vec![]));

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let api = Router::new().route("/api/ping", get(|| async { "pong" }));
        let app = build_app(
            api,
            health_state(),
            &server_config(vec!["http://localhost:3000".to_string()]),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/ping")
                    .header("origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_invalid_origin_is_skipped() {
        // 不应 panic
        let _ = cors_layer(&["bad\norigin".to_string()]);
    }
}
