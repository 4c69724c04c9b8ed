//! 值对象模块

mod article;
mod ids;

pub use article::{Article, ArticleError};
pub use ids::{MaterialTypeId, ProductId, ProductTypeId, WorkshopId};
