//! PostgreSQL 事务管理

use pfs_errors::{AppError, AppResult};
use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;

const REPEATABLE_READ: &str = "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ";

/// 事务管理器
///
/// 未提交的事务在 drop 时由 sqlx 自动回滚
#[derive(Clone)]
pub struct TransactionManager {
    pool: PgPool,
}

impl TransactionManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 开始 REPEATABLE READ 事务，多表删除在同一快照内完成
    pub async fn begin_repeatable_read(&self) -> AppResult<Transaction<'static, Postgres>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query(REPEATABLE_READ)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to set isolation level: {}", e)))?;

        debug!(isolation = "repeatable read", "Transaction started");
        Ok(tx)
    }

    pub async fn commit(tx: Transaction<'static, Postgres>) -> AppResult<()> {
        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit transaction: {}", e)))
    }

    pub async fn rollback(tx: Transaction<'static, Postgres>) -> AppResult<()> {
        tx.rollback()
            .await
            .map_err(|e| AppError::database(format!("Failed to rollback transaction: {}", e)))
    }
}
