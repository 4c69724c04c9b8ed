//! 数据库行到领域对象的转换

use pfs_common::AuditInfo;
use pfs_errors::{AppError, AppResult};

use crate::domain::entities::{MaterialType, Product, ProductDraft, ProductType, Workshop};
use crate::domain::value_objects::{
    Article, MaterialTypeId, ProductId, ProductTypeId, WorkshopId,
};
use crate::domain::views::{ProductView, ProductWorkshop};

use super::rows::{
    MaterialTypeRow, ProductRow, ProductTypeRow, ProductViewRow, ProductWorkshopRow, WorkshopRow,
};

pub fn product_type_from_row(row: ProductTypeRow) -> ProductType {
    ProductType::new(
        ProductTypeId(row.product_type_id),
        row.product_type_name,
        row.product_type_coefficient,
    )
}

pub fn material_type_from_row(row: MaterialTypeRow) -> MaterialType {
    MaterialType::new(
        MaterialTypeId(row.material_type_id),
        row.material_type_name,
        row.raw_material_loss_percent,
    )
}

pub fn workshop_from_row(row: WorkshopRow) -> Workshop {
    Workshop::new(
        WorkshopId(row.workshop_id),
        row.workshop_name,
        row.workshop_type.unwrap_or_default(),
        row.staff_count.unwrap_or_default(),
    )
}

/// 将 ProductRow 转换为 Product
///
/// 库中已存在的编号若不满足当前规则，视为数据损坏
pub fn product_from_row(row: ProductRow) -> AppResult<Product> {
    let article = Article::new(row.article_number.clone()).map_err(|e| {
        AppError::internal(format!(
            "Stored article {:?} of product {} is invalid: {}",
            row.article_number, row.product_id, e
        ))
    })?;

    Ok(Product::new(
        ProductId(row.product_id),
        ProductDraft {
            article,
            name: row.product_name,
            product_type_id: ProductTypeId(row.product_type_id),
            material_type_id: MaterialTypeId(row.material_type_id),
            min_price: row.minimum_partner_price,
        },
        AuditInfo::restore(row.created_at.and_utc(), row.updated_at.and_utc()),
    ))
}

pub fn product_view_from_row(row: ProductViewRow) -> ProductView {
    ProductView {
        id: ProductId(row.product_id),
        article: row.article_number,
        name: row.product_name,
        min_price: row.minimum_partner_price,
        product_type_id: ProductTypeId(row.product_type_id),
        material_type_id: MaterialTypeId(row.material_type_id),
        product_type_name: row.product_type_name,
        material_type_name: row.material_type_name,
        created_at: row.created_at.and_utc(),
    }
}

pub fn product_workshop_from_row(row: ProductWorkshopRow) -> ProductWorkshop {
    ProductWorkshop {
        workshop_id: WorkshopId(row.workshop_id),
        workshop_name: row.workshop_name,
        staff_count: row.staff_count.unwrap_or_default(),
        manufacturing_hours: row.manufacturing_time_hours,
    }
}
