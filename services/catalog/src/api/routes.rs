//! 目录服务路由

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post, put},
};
use pfs_errors::{AppError, AppResult};
use tracing::info;

use crate::application::{
    CalculateProductionTimeQuery, DeleteProductCommand, GetProductQuery,
    ListProductWorkshopsQuery, ServiceHandler,
};
use crate::domain::value_objects::ProductId;

use super::conversions::{create_command, update_command};
use super::dto::*;

type HandlerState = State<Arc<ServiceHandler>>;

/// 目录服务路由
pub fn routes(handler: Arc<ServiceHandler>) -> Router {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/product/{id}", get(get_product))
        .route("/api/products/{id}", put(update_product).delete(delete_product))
        .route("/api/product-types", get(list_product_types))
        .route("/api/material-types", get(list_material_types))
        .route("/api/workshops", get(list_workshops))
        .route("/api/product-workshops/{product_id}", get(list_product_workshops))
        .route("/api/calculate-raw-materials", post(calculate_raw_materials))
        .route(
            "/api/calculate-production-time/{product_id}",
            get(calculate_production_time),
        )
        .with_state(handler)
}

// 请求体解析失败统一转为 400 problem details
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::validation(rejection.body_text()))
}

async fn list_products(State(handler): HandlerState) -> AppResult<Json<Vec<ProductListItem>>> {
    let products = handler.list_products().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

async fn get_product(
    State(handler): HandlerState,
    Path(id): Path<i32>,
) -> AppResult<Json<ProductResponse>> {
    let product = handler
        .get_product(GetProductQuery {
            product_id: ProductId(id),
        })
        .await?;
    Ok(Json(product.into()))
}

async fn create_product(
    State(handler): HandlerState,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> AppResult<Json<CreateProductResponse>> {
    let cmd = create_command(json_body(payload)?)?;
    let product_id = handler.create_product(cmd).await?;

    Ok(Json(CreateProductResponse {
        success: true,
        message: "Product created successfully".to_string(),
        product_id: product_id.0,
    }))
}

async fn update_product(
    State(handler): HandlerState,
    Path(id): Path<i32>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let cmd = update_command(id, json_body(payload)?)?;
    handler.update_product(cmd).await?;

    Ok(Json(MessageResponse::ok("Product updated successfully")))
}

async fn delete_product(
    State(handler): HandlerState,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    handler
        .delete_product(DeleteProductCommand {
            product_id: ProductId(id),
        })
        .await?;

    Ok(Json(MessageResponse::ok("Product deleted successfully")))
}

async fn list_product_types(
    State(handler): HandlerState,
) -> AppResult<Json<Vec<ProductTypeResponse>>> {
    let types = handler.list_product_types().await?;
    Ok(Json(types.into_iter().map(Into::into).collect()))
}

async fn list_material_types(
    State(handler): HandlerState,
) -> AppResult<Json<Vec<MaterialTypeResponse>>> {
    let types = handler.list_material_types().await?;
    Ok(Json(types.into_iter().map(Into::into).collect()))
}

async fn list_workshops(State(handler): HandlerState) -> AppResult<Json<Vec<WorkshopResponse>>> {
    let workshops = handler.list_workshops().await?;
    Ok(Json(workshops.into_iter().map(Into::into).collect()))
}

async fn list_product_workshops(
    State(handler): HandlerState,
    Path(product_id): Path<i32>,
) -> AppResult<Json<Vec<ProductWorkshopResponse>>> {
    let rows = handler
        .list_product_workshops(ListProductWorkshopsQuery {
            product_id: ProductId(product_id),
        })
        .await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

async fn calculate_raw_materials(
    State(handler): HandlerState,
    payload: Result<Json<RawMaterialRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<RawMaterialResponse>)> {
    let req = json_body(payload)?;
    info!(
        product_type_id = req.product_type_id,
        material_type_id = req.material_type_id,
        quantity = req.quantity,
        "Raw material calculation request"
    );

    let response = RawMaterialResponse::from(handler.calculate_raw_material(req.into()).await?);
    let status = match response {
        RawMaterialResponse::Success { .. } => StatusCode::OK,
        RawMaterialResponse::InvalidInput { .. } => StatusCode::BAD_REQUEST,
    };

    Ok((status, Json(response)))
}

async fn calculate_production_time(
    State(handler): HandlerState,
    Path(product_id): Path<i32>,
) -> AppResult<Json<ProductionTimeResponse>> {
    let summary = handler
        .calculate_production_time(CalculateProductionTimeQuery {
            product_id: ProductId(product_id),
        })
        .await?;
    Ok(Json(summary.into()))
}
