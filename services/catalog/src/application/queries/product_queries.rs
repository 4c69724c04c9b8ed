//! Product queries

use crate::domain::value_objects::ProductId;

/// 获取产品查询
#[derive(Debug, Clone)]
pub struct GetProductQuery {
    pub product_id: ProductId,
}

/// 产品车间列表查询
#[derive(Debug, Clone)]
pub struct ListProductWorkshopsQuery {
    pub product_id: ProductId,
}

/// 生产时长计算查询
#[derive(Debug, Clone)]
pub struct CalculateProductionTimeQuery {
    pub product_id: ProductId,
}
