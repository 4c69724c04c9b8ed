//! 材料类型实体

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::MaterialTypeId;

/// 材料类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialType {
    id: MaterialTypeId,
    name: String,
    /// 原材料损耗百分比
    waste_percent: Decimal,
}

impl MaterialType {
    pub fn new(id: MaterialTypeId, name: impl Into<String>, waste_percent: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            waste_percent,
        }
    }

    pub fn id(&self) -> MaterialTypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn waste_percent(&self) -> Decimal {
        self.waste_percent
    }

    pub fn waste_percent_f64(&self) -> f64 {
        self.waste_percent.to_f64().unwrap_or(f64::NAN)
    }
}
