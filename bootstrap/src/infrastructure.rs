//! 基础设施资源管理
//!
//! 统一管理服务共享的基础设施资源

use pfs_adapter_postgres::{PoolStatus, PostgresConfig, create_pool};
use pfs_config::AppConfig;
use pfs_errors::AppResult;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

use crate::retry::{RetryPolicy, with_retry};

/// 基础设施资源容器
#[derive(Clone)]
pub struct Infrastructure {
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（带重试）
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        let retry_policy = RetryPolicy::for_database(&config.database);

        let pg_config = PostgresConfig::new(config.database.url.expose_secret())
            .with_max_connections(config.database.max_connections)
            .with_min_connections(config.database.min_connections)
            .with_timeouts(
                config.database.connect_timeout(),
                config.database.idle_timeout(),
            );

        let postgres_pool = with_retry(&retry_policy, "PostgreSQL connection", || {
            let cfg = pg_config.clone();
            async move { create_pool(&cfg).await }
        })
        .await?;

        info!(
            max_connections = config.database.max_connections,
            "PostgreSQL connection pool created"
        );

        Ok(Self::new(postgres_pool))
    }

    /// 使用已有连接池构建（测试或自定义启动）
    pub fn new(postgres_pool: PgPool) -> Self {
        Self { postgres_pool }
    }

    /// 获取 PostgreSQL 连接池
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    pub fn pool_status(&self) -> PoolStatus {
        PoolStatus::of(&self.postgres_pool)
    }
}
