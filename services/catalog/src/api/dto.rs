//! 请求与响应结构
//!
//! 字段名与前端约定保持一致

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ========== 产品 ==========

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i32,
    pub article: String,
    pub name: String,
    pub min_price: f64,
    pub product_type_id: i32,
    pub material_type_id: i32,
    pub product_type_name: String,
    pub material_type_name: String,
    pub created_at: DateTime<Utc>,
}

/// 产品列表项，材料名称字段为 material_name
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductListItem {
    pub id: i32,
    pub article: String,
    pub name: String,
    pub min_price: f64,
    pub product_type_id: i32,
    pub material_type_id: i32,
    pub product_type_name: String,
    pub material_name: String,
    pub created_at: DateTime<Utc>,
}

/// 新建与更新产品共用的请求体
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub article: String,
    pub name: String,
    pub product_type_id: i32,
    pub material_type_id: i32,
    pub min_price: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateProductResponse {
    pub success: bool,
    pub message: String,
    pub product_id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

// ========== 参考数据 ==========

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductTypeResponse {
    pub id: i32,
    pub name: String,
    pub coefficient: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MaterialTypeResponse {
    pub id: i32,
    pub name: String,
    pub waste_percent: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkshopResponse {
    pub id: i32,
    pub name: String,
    pub people_count: i32,
    pub workshop_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductWorkshopResponse {
    pub workshop_id: i32,
    pub workshop_name: String,
    pub staff_count: i32,
    /// 加工时长（小时）
    pub production_time: f64,
}

// ========== 计算 ==========

#[derive(Debug, Deserialize)]
pub struct RawMaterialRequest {
    pub product_type_id: i32,
    pub material_type_id: i32,
    pub quantity: i64,
    pub param1: f64,
    pub param2: f64,
}

/// 原材料计算响应，以 status 区分成功与输入错误
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RawMaterialResponse {
    Success { result: u64 },
    InvalidInput { field: String, message: String },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductionTimeResponse {
    pub total_time: f64,
    pub workshops_count: usize,
    pub workshops_list: String,
}
