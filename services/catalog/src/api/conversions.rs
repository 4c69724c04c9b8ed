//! Domain 与 DTO 之间的转换

use std::str::FromStr;

use pfs_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::application::{
    CalculateRawMaterialCommand, CreateProductCommand, RawMaterialOutcome, UpdateProductCommand,
};
use crate::domain::entities::{MaterialType, ProductType, Workshop};
use crate::domain::services::ProductionTimeSummary;
use crate::domain::value_objects::{MaterialTypeId, ProductId, ProductTypeId};
use crate::domain::views::{ProductView, ProductWorkshop};

use super::dto::*;

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

// 解析价格，经字符串转换以保留十进制表示
pub fn parse_price(value: f64) -> AppResult<Decimal> {
    if !value.is_finite() {
        return Err(AppError::validation("Minimum partner price must be a number"));
    }
    Decimal::from_str(&value.to_string())
        .map_err(|_| AppError::validation(format!("Minimum partner price {} is out of range", value)))
}

pub fn create_command(req: ProductRequest) -> AppResult<CreateProductCommand> {
    Ok(CreateProductCommand {
        min_price: parse_price(req.min_price)?,
        article: req.article,
        name: req.name,
        product_type_id: ProductTypeId(req.product_type_id),
        material_type_id: MaterialTypeId(req.material_type_id),
    })
}

pub fn update_command(product_id: i32, req: ProductRequest) -> AppResult<UpdateProductCommand> {
    Ok(UpdateProductCommand {
        product_id: ProductId(product_id),
        min_price: parse_price(req.min_price)?,
        article: req.article,
        name: req.name,
        product_type_id: ProductTypeId(req.product_type_id),
        material_type_id: MaterialTypeId(req.material_type_id),
    })
}

impl From<RawMaterialRequest> for CalculateRawMaterialCommand {
    fn from(req: RawMaterialRequest) -> Self {
        Self {
            product_type_id: ProductTypeId(req.product_type_id),
            material_type_id: MaterialTypeId(req.material_type_id),
            quantity: req.quantity,
            param1: req.param1,
            param2: req.param2,
        }
    }
}

impl From<ProductView> for ProductResponse {
    fn from(view: ProductView) -> Self {
        Self {
            id: view.id.0,
            article: view.article,
            name: view.name,
            min_price: decimal_to_f64(view.min_price),
            product_type_id: view.product_type_id.0,
            material_type_id: view.material_type_id.0,
            product_type_name: view.product_type_name,
            material_type_name: view.material_type_name,
            created_at: view.created_at,
        }
    }
}

impl From<ProductView> for ProductListItem {
    fn from(view: ProductView) -> Self {
        Self {
            id: view.id.0,
            article: view.article,
            name: view.name,
            min_price: decimal_to_f64(view.min_price),
            product_type_id: view.product_type_id.0,
            material_type_id: view.material_type_id.0,
            product_type_name: view.product_type_name,
            material_name: view.material_type_name,
            created_at: view.created_at,
        }
    }
}

impl From<ProductType> for ProductTypeResponse {
    fn from(product_type: ProductType) -> Self {
        Self {
            id: product_type.id().0,
            name: product_type.name().to_string(),
            coefficient: decimal_to_f64(product_type.coefficient()),
        }
    }
}

impl From<MaterialType> for MaterialTypeResponse {
    fn from(material_type: MaterialType) -> Self {
        Self {
            id: material_type.id().0,
            name: material_type.name().to_string(),
            waste_percent: decimal_to_f64(material_type.waste_percent()),
        }
    }
}

impl From<Workshop> for WorkshopResponse {
    fn from(workshop: Workshop) -> Self {
        Self {
            id: workshop.id().0,
            name: workshop.name().to_string(),
            people_count: workshop.staff_count(),
            workshop_type: workshop.workshop_type().to_string(),
        }
    }
}

impl From<ProductWorkshop> for ProductWorkshopResponse {
    fn from(row: ProductWorkshop) -> Self {
        Self {
            production_time: row.hours_f64(),
            workshop_id: row.workshop_id.0,
            workshop_name: row.workshop_name,
            staff_count: row.staff_count,
        }
    }
}

impl From<RawMaterialOutcome> for RawMaterialResponse {
    fn from(outcome: RawMaterialOutcome) -> Self {
        match outcome {
            RawMaterialOutcome::Success(result) => Self::Success { result },
            RawMaterialOutcome::InvalidInput { field, message } => Self::InvalidInput {
                field: field.to_string(),
                message,
            },
        }
    }
}

impl From<ProductionTimeSummary> for ProductionTimeResponse {
    fn from(summary: ProductionTimeSummary) -> Self {
        Self {
            total_time: summary.total_hours,
            workshops_count: summary.workshop_count,
            workshops_list: summary.workshops_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_keeps_decimal_digits() {
        assert_eq!(parse_price(15000.5).unwrap(), Decimal::new(150005, 1));
        assert_eq!(parse_price(0.1).unwrap(), Decimal::new(1, 1));
    }

    #[test]
    fn test_parse_price_out_of_range() {
        assert!(parse_price(1e40).is_err());
        assert!(parse_price(f64::NAN).is_err());
    }
}
