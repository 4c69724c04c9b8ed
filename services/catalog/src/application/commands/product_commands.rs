//! Product commands

use pfs_errors::{AppError, AppResult};
use rust_decimal::Decimal;

use crate::domain::entities::MAX_NAME_LENGTH;
use crate::domain::value_objects::{MaterialTypeId, ProductId, ProductTypeId};

/// 创建产品命令
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub article: String,
    pub name: String,
    pub product_type_id: ProductTypeId,
    pub material_type_id: MaterialTypeId,
    pub min_price: Decimal,
}

impl CreateProductCommand {
    pub fn validate(&self) -> AppResult<()> {
        validate_product_fields(&self.name, self.min_price)
    }
}

/// 更新产品命令
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub product_id: ProductId,
    pub article: String,
    pub name: String,
    pub product_type_id: ProductTypeId,
    pub material_type_id: MaterialTypeId,
    pub min_price: Decimal,
}

impl UpdateProductCommand {
    pub fn validate(&self) -> AppResult<()> {
        validate_product_fields(&self.name, self.min_price)
    }
}

/// 删除产品命令
#[derive(Debug, Clone)]
pub struct DeleteProductCommand {
    pub product_id: ProductId,
}

fn validate_product_fields(name: &str, min_price: Decimal) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Product name must not be empty"));
    }
    if name.trim().chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "Product name must not exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    if min_price <= Decimal::ZERO {
        return Err(AppError::validation("Minimum partner price must be positive"));
    }
    Ok(())
}
