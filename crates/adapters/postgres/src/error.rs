//! sqlx 错误分类

use pfs_errors::AppError;

/// 唯一约束冲突
pub const UNIQUE_VIOLATION: &str = "23505";
/// 外键约束冲突
pub const FOREIGN_KEY_VIOLATION: &str = "23503";
/// 检查约束冲突
pub const CHECK_VIOLATION: &str = "23514";

/// 提取数据库错误的 SQLSTATE
pub fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
        _ => None,
    }
}

/// 将写操作错误映射为 AppError
///
/// 约束冲突属于客户端错误，其余归为数据库错误
pub fn map_write_error(err: sqlx::Error, context: &str) -> AppError {
    match sqlstate(&err).as_deref() {
        Some(UNIQUE_VIOLATION) => AppError::conflict(format!("{}: duplicate value", context)),
        Some(FOREIGN_KEY_VIOLATION) => {
            AppError::validation(format!("{}: referenced record does not exist", context))
        }
        Some(CHECK_VIOLATION) => {
            AppError::validation(format!("{}: value violates a constraint", context))
        }
        _ => AppError::database(format!("{}: {}", context, err)),
    }
}
