//! 强类型 ID 定义
//!
//! 数据库使用 SERIAL 主键，ID 由数据库分配

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// 产品 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
#[serde(transparent)]
pub struct ProductId(pub i32);

/// 产品类型 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
#[serde(transparent)]
pub struct ProductTypeId(pub i32);

/// 材料类型 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
#[serde(transparent)]
pub struct MaterialTypeId(pub i32);

/// 车间 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
#[serde(transparent)]
pub struct WorkshopId(pub i32);
