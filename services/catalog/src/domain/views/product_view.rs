//! 产品列表视图

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::value_objects::{MaterialTypeId, ProductId, ProductTypeId};

/// 产品视图（带产品类型和材料类型名称）
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub id: ProductId,
    pub article: String,
    pub name: String,
    pub min_price: Decimal,
    pub product_type_id: ProductTypeId,
    pub material_type_id: MaterialTypeId,
    pub product_type_name: String,
    pub material_type_name: String,
    pub created_at: DateTime<Utc>,
}
