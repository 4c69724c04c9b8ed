//! 产品类型实体

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProductTypeId;

/// 产品类型
///
/// 系数作用于原材料计算中的尺寸乘积
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductType {
    id: ProductTypeId,
    name: String,
    coefficient: Decimal,
}

impl ProductType {
    pub fn new(id: ProductTypeId, name: impl Into<String>, coefficient: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            coefficient,
        }
    }

    pub fn id(&self) -> ProductTypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coefficient(&self) -> Decimal {
        self.coefficient
    }

    /// 计算引擎使用的浮点系数
    pub fn coefficient_f64(&self) -> f64 {
        self.coefficient.to_f64().unwrap_or(f64::NAN)
    }
}
