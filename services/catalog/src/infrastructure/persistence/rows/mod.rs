//! 数据库行映射结构
//!
//! 时间列在查询中统一转换为 UTC 的 timestamp

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::FromRow;

/// 产品类型数据库行
#[derive(Debug, FromRow)]
pub struct ProductTypeRow {
    pub product_type_id: i32,
    pub product_type_name: String,
    pub product_type_coefficient: Decimal,
}

/// 材料类型数据库行
#[derive(Debug, FromRow)]
pub struct MaterialTypeRow {
    pub material_type_id: i32,
    pub material_type_name: String,
    pub raw_material_loss_percent: Decimal,
}

/// 车间数据库行
#[derive(Debug, FromRow)]
pub struct WorkshopRow {
    pub workshop_id: i32,
    pub workshop_name: String,
    pub workshop_type: Option<String>,
    pub staff_count: Option<i32>,
}

/// 产品数据库行
#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub product_id: i32,
    pub article_number: String,
    pub product_name: String,
    pub product_type_id: i32,
    pub material_type_id: i32,
    pub minimum_partner_price: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// 产品视图行（联表查询）
#[derive(Debug, FromRow)]
pub struct ProductViewRow {
    pub product_id: i32,
    pub article_number: String,
    pub product_name: String,
    pub minimum_partner_price: Decimal,
    pub product_type_id: i32,
    pub material_type_id: i32,
    pub product_type_name: String,
    pub material_type_name: String,
    pub created_at: NaiveDateTime,
}

/// 产品车间行（联表查询）
#[derive(Debug, FromRow)]
pub struct ProductWorkshopRow {
    pub workshop_id: i32,
    pub workshop_name: String,
    pub staff_count: Option<i32>,
    pub manufacturing_time_hours: Decimal,
}
