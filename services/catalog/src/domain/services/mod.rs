//! 领域服务
//!
//! 纯计算引擎：无 I/O，不依赖持久化层

mod production_time;
mod raw_material_calculator;

pub use production_time::{ProductionTimeAggregator, ProductionTimeSummary, WorkshopTime};
pub use raw_material_calculator::{CalculationError, RawMaterialCalculator};
