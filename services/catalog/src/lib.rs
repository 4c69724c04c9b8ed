//! catalog - 家具产品目录服务
//!
//! 产品、产品类型、材料类型、车间，以及原材料用量与生产时长计算

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
