//! 产品车间关联视图

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::domain::services::WorkshopTime;
use crate::domain::value_objects::WorkshopId;

/// 产品在某车间的加工记录
#[derive(Debug, Clone, PartialEq)]
pub struct ProductWorkshop {
    pub workshop_id: WorkshopId,
    pub workshop_name: String,
    pub staff_count: i32,
    /// 加工时长（小时）
    pub manufacturing_hours: Decimal,
}

impl ProductWorkshop {
    pub fn hours_f64(&self) -> f64 {
        self.manufacturing_hours.to_f64().unwrap_or(0.0)
    }

    /// 转换为生产时长汇总的输入
    pub fn to_workshop_time(&self) -> WorkshopTime {
        WorkshopTime::new(self.workshop_name.clone(), self.hours_f64())
    }
}
