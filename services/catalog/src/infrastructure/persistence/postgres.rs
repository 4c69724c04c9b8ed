//! PostgreSQL repository implementation

use async_trait::async_trait;
use pfs_adapter_postgres::{TransactionManager, map_write_error};
use pfs_errors::{AppError, AppResult};
use sqlx::PgPool;
use tracing::debug;

use crate::domain::entities::{MaterialType, Product, ProductDraft, ProductType, Workshop};
use crate::domain::repositories::{
    ProductRepository, ProductWorkshopRepository, ReferenceDataRepository,
};
use crate::domain::value_objects::{Article, MaterialTypeId, ProductId, ProductTypeId};
use crate::domain::views::{ProductView, ProductWorkshop};

use super::converters::{
    material_type_from_row, product_from_row, product_type_from_row, product_view_from_row,
    product_workshop_from_row, workshop_from_row,
};
use super::rows::{
    MaterialTypeRow, ProductRow, ProductTypeRow, ProductViewRow, ProductWorkshopRow, WorkshopRow,
};

const PRODUCT_VIEW_SELECT: &str = r#"
    SELECT p.product_id, p.article_number, p.product_name, p.minimum_partner_price,
           p.product_type_id, p.material_type_id,
           pt.product_type_name, mt.material_type_name,
           p.created_at::timestamp AS created_at
    FROM products p
    JOIN product_types pt ON p.product_type_id = pt.product_type_id
    JOIN material_types mt ON p.material_type_id = mt.material_type_id
"#;

// ============================================================================
// ProductRepository 实现
// ============================================================================

pub struct PostgresProductRepository {
    pool: PgPool,
    tx_manager: TransactionManager,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            tx_manager: TransactionManager::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT product_id, article_number, product_name, product_type_id, material_type_id,
                   minimum_partner_price,
                   created_at::timestamp AS created_at, updated_at::timestamp AS updated_at
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to query product: {}", e)))?;

        row.map(product_from_row).transpose()
    }

    async fn find_view_by_id(&self, id: ProductId) -> AppResult<Option<ProductView>> {
        let sql = format!("{PRODUCT_VIEW_SELECT} WHERE p.product_id = $1");

        let row = sqlx::query_as::<_, ProductViewRow>(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to query product: {}", e)))?;

        Ok(row.map(product_view_from_row))
    }

    async fn list_views(&self) -> AppResult<Vec<ProductView>> {
        let sql = format!("{PRODUCT_VIEW_SELECT} ORDER BY p.product_name");

        let rows = sqlx::query_as::<_, ProductViewRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list products: {}", e)))?;

        Ok(rows.into_iter().map(product_view_from_row).collect())
    }

    async fn exists_by_article(
        &self,
        article: &Article,
        exclude: Option<ProductId>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM products
                WHERE article_number = $1 AND ($2::int IS NULL OR product_id <> $2)
            )
            "#,
        )
        .bind(article.as_str())
        .bind(exclude.map(|id| id.0))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to check article: {}", e)))?;

        Ok(exists)
    }

    async fn insert(&self, draft: &ProductDraft) -> AppResult<ProductId> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO products
                (article_number, product_name, product_type_id, material_type_id, minimum_partner_price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING product_id
            "#,
        )
        .bind(draft.article.as_str())
        .bind(&draft.name)
        .bind(draft.product_type_id.0)
        .bind(draft.material_type_id.0)
        .bind(draft.min_price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to insert product"))?;

        Ok(ProductId(id))
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE products SET
                article_number = $1,
                product_name = $2,
                product_type_id = $3,
                material_type_id = $4,
                minimum_partner_price = $5,
                updated_at = CURRENT_TIMESTAMP
            WHERE product_id = $6
            "#,
        )
        .bind(product.article().as_str())
        .bind(product.name())
        .bind(product.product_type_id().0)
        .bind(product.material_type_id().0)
        .bind(product.min_price())
        .bind(product.id().0)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update product"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Product {} not found", product.id())));
        }

        Ok(())
    }

    async fn delete(&self, id: ProductId) -> AppResult<()> {
        let mut tx = self.tx_manager.begin_repeatable_read().await?;

        let workshops = sqlx::query("DELETE FROM product_workshops WHERE product_id = $1")
            .bind(id.0)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete product workshops: {}", e)))?;

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id.0)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, "Failed to delete product"))?;

        if result.rows_affected() == 0 {
            TransactionManager::rollback(tx).await?;
            return Err(AppError::not_found(format!("Product {} not found", id)));
        }

        TransactionManager::commit(tx).await?;

        debug!(
            product_id = %id,
            workshop_rows = workshops.rows_affected(),
            "Product deleted"
        );
        Ok(())
    }
}

// ============================================================================
// ReferenceDataRepository 实现
// ============================================================================

pub struct PostgresReferenceDataRepository {
    pool: PgPool,
}

impl PostgresReferenceDataRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferenceDataRepository for PostgresReferenceDataRepository {
    async fn find_product_type(&self, id: ProductTypeId) -> AppResult<Option<ProductType>> {
        let row = sqlx::query_as::<_, ProductTypeRow>(
            r#"
            SELECT product_type_id, product_type_name, product_type_coefficient
            FROM product_types
            WHERE product_type_id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to query product type: {}", e)))?;

        Ok(row.map(product_type_from_row))
    }

    async fn find_material_type(&self, id: MaterialTypeId) -> AppResult<Option<MaterialType>> {
        let row = sqlx::query_as::<_, MaterialTypeRow>(
            r#"
            SELECT material_type_id, material_type_name, raw_material_loss_percent
            FROM material_types
            WHERE material_type_id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to query material type: {}", e)))?;

        Ok(row.map(material_type_from_row))
    }

    async fn list_product_types(&self) -> AppResult<Vec<ProductType>> {
        let rows = sqlx::query_as::<_, ProductTypeRow>(
            r#"
            SELECT product_type_id, product_type_name, product_type_coefficient
            FROM product_types
            ORDER BY product_type_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list product types: {}", e)))?;

        Ok(rows.into_iter().map(product_type_from_row).collect())
    }

    async fn list_material_types(&self) -> AppResult<Vec<MaterialType>> {
        let rows = sqlx::query_as::<_, MaterialTypeRow>(
            r#"
            SELECT material_type_id, material_type_name, raw_material_loss_percent
            FROM material_types
            ORDER BY material_type_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list material types: {}", e)))?;

        Ok(rows.into_iter().map(material_type_from_row).collect())
    }

    async fn list_workshops(&self) -> AppResult<Vec<Workshop>> {
        let rows = sqlx::query_as::<_, WorkshopRow>(
            r#"
            SELECT workshop_id, workshop_name, workshop_type, staff_count
            FROM workshops
            ORDER BY workshop_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list workshops: {}", e)))?;

        Ok(rows.into_iter().map(workshop_from_row).collect())
    }
}

// ============================================================================
// ProductWorkshopRepository 实现
// ============================================================================

pub struct PostgresProductWorkshopRepository {
    pool: PgPool,
}

impl PostgresProductWorkshopRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductWorkshopRepository for PostgresProductWorkshopRepository {
    async fn list_by_product(&self, product_id: ProductId) -> AppResult<Vec<ProductWorkshop>> {
        let rows = sqlx::query_as::<_, ProductWorkshopRow>(
            r#"
            SELECT pw.workshop_id, w.workshop_name, w.staff_count, pw.manufacturing_time_hours
            FROM product_workshops pw
            JOIN workshops w ON pw.workshop_id = w.workshop_id
            WHERE pw.product_id = $1
            ORDER BY pw.manufacturing_time_hours DESC, pw.workshop_id
            "#,
        )
        .bind(product_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list product workshops: {}", e)))?;

        Ok(rows.into_iter().map(product_workshop_from_row).collect())
    }
}
