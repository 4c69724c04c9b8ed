//! 产品仓储接口

use async_trait::async_trait;
use pfs_errors::AppResult;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{Product, ProductDraft};
use crate::domain::value_objects::{Article, ProductId};
use crate::domain::views::ProductView;

/// 产品仓储接口
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 根据 ID 查找产品
    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>>;

    /// 根据 ID 查找产品视图
    async fn find_view_by_id(&self, id: ProductId) -> AppResult<Option<ProductView>>;

    /// 所有产品视图，按名称排序
    async fn list_views(&self) -> AppResult<Vec<ProductView>>;

    /// 检查编号是否已被其他产品占用
    async fn exists_by_article(
        &self,
        article: &Article,
        exclude: Option<ProductId>,
    ) -> AppResult<bool>;

    /// 新建产品，返回数据库分配的 ID
    async fn insert(&self, draft: &ProductDraft) -> AppResult<ProductId>;

    /// 更新产品
    async fn update(&self, product: &Product) -> AppResult<()>;

    /// 删除产品及其车间关联（同一事务）
    async fn delete(&self, id: ProductId) -> AppResult<()>;
}
