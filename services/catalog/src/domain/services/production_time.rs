//! 生产时长汇总

use serde::Serialize;

/// 单个车间的加工时长
#[derive(Debug, Clone, PartialEq)]
pub struct WorkshopTime {
    pub workshop_name: String,
    pub hours: f64,
}

impl WorkshopTime {
    pub fn new(workshop_name: impl Into<String>, hours: f64) -> Self {
        Self {
            workshop_name: workshop_name.into(),
            hours,
        }
    }
}

/// 生产时长汇总结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionTimeSummary {
    pub total_hours: f64,
    pub workshop_count: usize,
    /// 车间名称，按输入顺序以 ", " 连接
    pub workshops_list: String,
}

impl ProductionTimeSummary {
    pub fn empty() -> Self {
        Self {
            total_hours: 0.0,
            workshop_count: 0,
            workshops_list: String::new(),
        }
    }
}

/// 生产时长汇总器
///
/// 空输入返回 0 小时、0 个车间和空列表，不视为错误
pub struct ProductionTimeAggregator;

impl ProductionTimeAggregator {
    pub fn aggregate(entries: &[WorkshopTime]) -> ProductionTimeSummary {
        if entries.is_empty() {
            return ProductionTimeSummary::empty();
        }

        let total_hours = entries.iter().map(|e| e.hours).sum();
        let workshops_list = entries
            .iter()
            .map(|e| e.workshop_name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        ProductionTimeSummary {
            total_hours,
            workshop_count: entries.len(),
            workshops_list,
        }
    }
}
