//! Calculation commands

use crate::domain::value_objects::{MaterialTypeId, ProductTypeId};

/// 原材料计算命令
#[derive(Debug, Clone)]
pub struct CalculateRawMaterialCommand {
    pub product_type_id: ProductTypeId,
    pub material_type_id: MaterialTypeId,
    pub quantity: i64,
    pub param1: f64,
    pub param2: f64,
}

/// 原材料计算结果
#[derive(Debug, Clone, PartialEq)]
pub enum RawMaterialOutcome {
    Success(u64),
    /// 输入未通过计算器校验
    InvalidInput {
        field: &'static str,
        message: String,
    },
}
