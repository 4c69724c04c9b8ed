//! 产品实体

use pfs_common::AuditInfo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Article, MaterialTypeId, ProductId, ProductTypeId};

/// 产品名称最大长度
pub const MAX_NAME_LENGTH: usize = 255;

/// 产品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    article: Article,
    name: String,
    product_type_id: ProductTypeId,
    material_type_id: MaterialTypeId,
    /// 合作伙伴最低价
    min_price: Decimal,
    audit_info: AuditInfo,
}

impl Product {
    pub fn new(id: ProductId, draft: ProductDraft, audit_info: AuditInfo) -> Self {
        Self {
            id,
            article: draft.article,
            name: draft.name,
            product_type_id: draft.product_type_id,
            material_type_id: draft.material_type_id,
            min_price: draft.min_price,
            audit_info,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_type_id(&self) -> ProductTypeId {
        self.product_type_id
    }

    pub fn material_type_id(&self) -> MaterialTypeId {
        self.material_type_id
    }

    pub fn min_price(&self) -> Decimal {
        self.min_price
    }

    pub fn audit_info(&self) -> &AuditInfo {
        &self.audit_info
    }

    /// 用新数据覆盖产品字段
    pub fn apply(&mut self, draft: ProductDraft) {
        self.article = draft.article;
        self.name = draft.name;
        self.product_type_id = draft.product_type_id;
        self.material_type_id = draft.material_type_id;
        self.min_price = draft.min_price;
        self.audit_info.touch();
    }
}

/// 已校验的产品数据（用于新建和更新）
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub article: Article,
    pub name: String,
    pub product_type_id: ProductTypeId,
    pub material_type_id: MaterialTypeId,
    pub min_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn draft(article: &str) -> ProductDraft {
        ProductDraft {
            article: Article::new(article).unwrap(),
            name: "Sofa".to_string(),
            product_type_id: ProductTypeId(1),
            material_type_id: MaterialTypeId(2),
            min_price: Decimal::new(150000, 2),
        }
    }

    #[test]
    fn test_apply_replaces_fields_and_touches_audit() {
        let created = Utc::now() - Duration::days(1);
        let mut product = Product::new(
            ProductId(1),
            draft("SOFA-1"),
            AuditInfo::restore(created, created),
        );

        product.apply(draft("SOFA-2"));

        assert_eq!(product.article().as_str(), "SOFA-2");
        assert_eq!(product.audit_info().created_at, created);
        assert!(product.audit_info().updated_at > created);
    }
}
