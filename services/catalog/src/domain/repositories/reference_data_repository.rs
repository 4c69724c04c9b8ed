//! 参考数据仓储接口

use async_trait::async_trait;
use pfs_errors::AppResult;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{MaterialType, ProductType, Workshop};
use crate::domain::value_objects::{MaterialTypeId, ProductTypeId};

/// 产品类型、材料类型和车间的只读查询
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReferenceDataRepository: Send + Sync {
    async fn find_product_type(&self, id: ProductTypeId) -> AppResult<Option<ProductType>>;

    async fn find_material_type(&self, id: MaterialTypeId) -> AppResult<Option<MaterialType>>;

    /// 按 ID 排序
    async fn list_product_types(&self) -> AppResult<Vec<ProductType>>;

    /// 按 ID 排序
    async fn list_material_types(&self) -> AppResult<Vec<MaterialType>>;

    /// 按 ID 排序
    async fn list_workshops(&self) -> AppResult<Vec<Workshop>>;
}
