//! 原材料用量计算

use pfs_errors::AppError;
use thiserror::Error;

/// 计算错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("Invalid {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Raw material amount {value} does not fit the result type")]
    OutOfRange { value: f64 },
}

impl CalculationError {
    /// 出错的输入字段
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::OutOfRange { .. } => None,
        }
    }
}

impl From<CalculationError> for AppError {
    fn from(err: CalculationError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// 原材料计算器
///
/// 计算公式:
/// - 单件用量 = param1 × param2 × 产品类型系数
/// - 总用量 = 单件用量 × 数量
/// - 含损耗用量 = 总用量 × (1 + 损耗百分比 / 100)
/// - 结果四舍五入（0.5 向上）为整数
pub struct RawMaterialCalculator;

impl RawMaterialCalculator {
    pub fn calculate(
        coefficient: f64,
        waste_percent: f64,
        quantity: i64,
        param1: f64,
        param2: f64,
    ) -> Result<u64, CalculationError> {
        if quantity <= 0 {
            return Err(CalculationError::InvalidInput {
                field: "quantity",
                value: quantity as f64,
                reason: "must be a positive integer",
            });
        }
        ensure_positive("param1", param1)?;
        ensure_positive("param2", param2)?;
        ensure_positive("coefficient", coefficient)?;

        if !waste_percent.is_finite() || waste_percent < 0.0 {
            return Err(CalculationError::InvalidInput {
                field: "waste_percent",
                value: waste_percent,
                reason: "must be a non-negative number",
            });
        }

        let per_unit = param1 * param2 * coefficient;
        let total = per_unit * quantity as f64;
        let waste_multiplier = 1.0 + waste_percent / 100.0;
        let rounded = (total * waste_multiplier + 0.5).floor();

        // u64::MAX as f64 == 2^64
        if !rounded.is_finite() || rounded >= u64::MAX as f64 {
            return Err(CalculationError::OutOfRange { value: rounded });
        }

        Ok(rounded as u64)
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), CalculationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalculationError::InvalidInput {
            field,
            value,
            reason: "must be a positive number",
        })
    }
}
