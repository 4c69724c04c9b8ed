//! 产品车间关联仓储接口

use async_trait::async_trait;
use pfs_errors::AppResult;

#[cfg(test)]
use mockall::automock;

use crate::domain::value_objects::ProductId;
use crate::domain::views::ProductWorkshop;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProductWorkshopRepository: Send + Sync {
    /// 产品的车间记录，按加工时长降序
    async fn list_by_product(&self, product_id: ProductId) -> AppResult<Vec<ProductWorkshop>>;
}
