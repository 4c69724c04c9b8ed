//! Business logic handler

use std::sync::Arc;

use metrics::counter;
use pfs_errors::{AppError, AppResult};
use tracing::{info, warn};

use crate::domain::entities::{MaterialType, ProductDraft, ProductType, Workshop};
use crate::domain::repositories::{
    ProductRepository, ProductWorkshopRepository, ReferenceDataRepository,
};
use crate::domain::services::{
    CalculationError, ProductionTimeAggregator, ProductionTimeSummary, RawMaterialCalculator,
    WorkshopTime,
};
use crate::domain::value_objects::{Article, MaterialTypeId, ProductId, ProductTypeId};
use crate::domain::views::{ProductView, ProductWorkshop};

use super::commands::*;
use super::queries::*;

pub struct ServiceHandler {
    product_repo: Arc<dyn ProductRepository>,
    reference_repo: Arc<dyn ReferenceDataRepository>,
    workshop_repo: Arc<dyn ProductWorkshopRepository>,
}

impl ServiceHandler {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        reference_repo: Arc<dyn ReferenceDataRepository>,
        workshop_repo: Arc<dyn ProductWorkshopRepository>,
    ) -> Self {
        Self {
            product_repo,
            reference_repo,
            workshop_repo,
        }
    }

    // ========== 产品 CRUD ==========

    /// 产品列表（按名称排序）
    pub async fn list_products(&self) -> AppResult<Vec<ProductView>> {
        self.product_repo.list_views().await
    }

    /// 获取产品
    pub async fn get_product(&self, query: GetProductQuery) -> AppResult<ProductView> {
        self.product_repo
            .find_view_by_id(query.product_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {} not found", query.product_id)))
    }

    /// 创建产品
    pub async fn create_product(&self, cmd: CreateProductCommand) -> AppResult<ProductId> {
        info!(article = %cmd.article, "Creating product");

        // 1. 验证命令
        cmd.validate()?;
        let article = parse_article(&cmd.article)?;

        // 2. 检查编号是否已存在
        if self.product_repo.exists_by_article(&article, None).await? {
            return Err(AppError::conflict(format!(
                "Product with article {} already exists",
                article
            )));
        }

        // 3. 检查产品类型与材料类型
        self.require_product_type(cmd.product_type_id).await?;
        self.require_material_type(cmd.material_type_id).await?;

        // 4. 保存
        let draft = ProductDraft {
            article,
            name: cmd.name.trim().to_string(),
            product_type_id: cmd.product_type_id,
            material_type_id: cmd.material_type_id,
            min_price: cmd.min_price,
        };
        let product_id = self.product_repo.insert(&draft).await?;

        info!(%product_id, "Product created successfully");
        Ok(product_id)
    }

    /// 更新产品
    pub async fn update_product(&self, cmd: UpdateProductCommand) -> AppResult<()> {
        info!(product_id = %cmd.product_id, "Updating product");

        let mut product = self
            .product_repo
            .find_by_id(cmd.product_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {} not found", cmd.product_id)))?;

        cmd.validate()?;
        let article = parse_article(&cmd.article)?;

        // 编号唯一性检查排除自身
        if self
            .product_repo
            .exists_by_article(&article, Some(cmd.product_id))
            .await?
        {
            return Err(AppError::conflict(format!(
                "Product with article {} already exists",
                article
            )));
        }

        self.require_product_type(cmd.product_type_id).await?;
        self.require_material_type(cmd.material_type_id).await?;

        product.apply(ProductDraft {
            article,
            name: cmd.name.trim().to_string(),
            product_type_id: cmd.product_type_id,
            material_type_id: cmd.material_type_id,
            min_price: cmd.min_price,
        });
        self.product_repo.update(&product).await?;

        info!(product_id = %cmd.product_id, "Product updated successfully");
        Ok(())
    }

    /// 删除产品
    pub async fn delete_product(&self, cmd: DeleteProductCommand) -> AppResult<()> {
        info!(product_id = %cmd.product_id, "Deleting product");

        if self.product_repo.find_by_id(cmd.product_id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Product {} not found",
                cmd.product_id
            )));
        }

        self.product_repo.delete(cmd.product_id).await?;

        info!(product_id = %cmd.product_id, "Product deleted successfully");
        Ok(())
    }

    // ========== 参考数据 ==========

    pub async fn list_product_types(&self) -> AppResult<Vec<ProductType>> {
        self.reference_repo.list_product_types().await
    }

    pub async fn list_material_types(&self) -> AppResult<Vec<MaterialType>> {
        self.reference_repo.list_material_types().await
    }

    pub async fn list_workshops(&self) -> AppResult<Vec<Workshop>> {
        self.reference_repo.list_workshops().await
    }

    /// 产品车间列表（按加工时长降序）
    pub async fn list_product_workshops(
        &self,
        query: ListProductWorkshopsQuery,
    ) -> AppResult<Vec<ProductWorkshop>> {
        self.workshop_repo.list_by_product(query.product_id).await
    }

    // ========== 计算 ==========

    /// 原材料用量计算
    pub async fn calculate_raw_material(
        &self,
        cmd: CalculateRawMaterialCommand,
    ) -> AppResult<RawMaterialOutcome> {
        let product_type = self.require_product_type(cmd.product_type_id).await?;
        let material_type = self.require_material_type(cmd.material_type_id).await?;

        let result = RawMaterialCalculator::calculate(
            product_type.coefficient_f64(),
            material_type.waste_percent_f64(),
            cmd.quantity,
            cmd.param1,
            cmd.param2,
        );

        match result {
            Ok(amount) => {
                counter!("raw_material_calculations_total", "outcome" => "success").increment(1);
                info!(
                    product_type_id = %cmd.product_type_id,
                    material_type_id = %cmd.material_type_id,
                    quantity = cmd.quantity,
                    amount,
                    "Raw material calculated"
                );
                Ok(RawMaterialOutcome::Success(amount))
            }
            Err(err @ CalculationError::InvalidInput { field, .. }) => {
                counter!("raw_material_calculations_total", "outcome" => "invalid_input")
                    .increment(1);
                warn!(field, error = %err, "Raw material calculation rejected");
                Ok(RawMaterialOutcome::InvalidInput {
                    field,
                    message: err.to_string(),
                })
            }
            Err(err) => {
                counter!("raw_material_calculations_total", "outcome" => "out_of_range")
                    .increment(1);
                Err(err.into())
            }
        }
    }

    /// 生产时长计算
    pub async fn calculate_production_time(
        &self,
        query: CalculateProductionTimeQuery,
    ) -> AppResult<ProductionTimeSummary> {
        let rows = self.workshop_repo.list_by_product(query.product_id).await?;
        let entries: Vec<WorkshopTime> = rows.iter().map(ProductWorkshop::to_workshop_time).collect();

        let summary = ProductionTimeAggregator::aggregate(&entries);
        counter!("production_time_calculations_total").increment(1);

        Ok(summary)
    }

    // ========== 内部方法 ==========

    async fn require_product_type(&self, id: ProductTypeId) -> AppResult<ProductType> {
        self.reference_repo
            .find_product_type(id)
            .await?
            .ok_or_else(|| AppError::validation(format!("Product type {} does not exist", id)))
    }

    async fn require_material_type(&self, id: MaterialTypeId) -> AppResult<MaterialType> {
        self.reference_repo
            .find_material_type(id)
            .await?
            .ok_or_else(|| AppError::validation(format!("Material type {} does not exist", id)))
    }
}

fn parse_article(raw: &str) -> AppResult<Article> {
    Article::new(raw).map_err(|e| AppError::validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Product;
    use crate::domain::repositories::{
        MockProductRepository, MockProductWorkshopRepository, MockReferenceDataRepository,
    };
    use crate::domain::value_objects::WorkshopId;
    use mockall::predicate::eq;
    use pfs_common::AuditInfo;
    use rust_decimal::Decimal;

    fn handler(
        products: MockProductRepository,
        reference: MockReferenceDataRepository,
        workshops: MockProductWorkshopRepository,
    ) -> ServiceHandler {
        ServiceHandler::new(Arc::new(products), Arc::new(reference), Arc::new(workshops))
    }

    fn known_reference() -> MockReferenceDataRepository {
        let mut reference = MockReferenceDataRepository::new();
        reference.expect_find_product_type().returning(|id| {
            Ok((id == ProductTypeId(1))
                .then(|| ProductType::new(id, "Sofa", Decimal::new(12, 1))))
        });
        reference.expect_find_material_type().returning(|id| {
            Ok((id == MaterialTypeId(1))
                .then(|| MaterialType::new(id, "Oak", Decimal::new(5, 0))))
        });
        reference
    }

    fn create_command(article: &str) -> CreateProductCommand {
        CreateProductCommand {
            article: article.to_string(),
            name: "Sofa Pro".to_string(),
            product_type_id: ProductTypeId(1),
            material_type_id: MaterialTypeId(1),
            min_price: Decimal::new(1500000, 2),
        }
    }

    fn stored_product(id: i32) -> Product {
        Product::new(
            ProductId(id),
            ProductDraft {
                article: Article::new("SOFA-PRO").unwrap(),
                name: "Sofa Pro".to_string(),
                product_type_id: ProductTypeId(1),
                material_type_id: MaterialTypeId(1),
                min_price: Decimal::ONE,
            },
            AuditInfo::new(),
        )
    }

    #[tokio::test]
    async fn test_create_product_inserts_trimmed_article() {
        let mut products = MockProductRepository::new();
        products.expect_exists_by_article().returning(|_, _| Ok(false));
        products
            .expect_insert()
            .withf(|draft| draft.article.as_str() == "SOFA-PRO")
            .times(1)
            .returning(|_| Ok(ProductId(10)));

        let handler = handler(products, known_reference(), MockProductWorkshopRepository::new());

        let id = handler.create_product(create_command("  SOFA-PRO ")).await.unwrap();
        assert_eq!(id, ProductId(10));
    }

    #[tokio::test]
    async fn test_create_product_duplicate_article_conflicts() {
        let mut products = MockProductRepository::new();
        products.expect_exists_by_article().returning(|_, _| Ok(true));
        products.expect_insert().never();

        let handler = handler(products, known_reference(), MockProductWorkshopRepository::new());

        let result = handler.create_product(create_command("SOFA-PRO")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_product_unknown_type_is_validation_error() {
        let mut products = MockProductRepository::new();
        products.expect_exists_by_article().returning(|_, _| Ok(false));
        products.expect_insert().never();

        let handler = handler(products, known_reference(), MockProductWorkshopRepository::new());

        let mut cmd = create_command("SOFA-PRO");
        cmd.product_type_id = ProductTypeId(99);
        let result = handler.create_product(cmd).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_product_non_positive_price() {
        let mut products = MockProductRepository::new();
        products.expect_insert().never();

        let handler = handler(products, known_reference(), MockProductWorkshopRepository::new());

        let mut cmd = create_command("SOFA-PRO");
        cmd.min_price = Decimal::ZERO;
        let result = handler.create_product(cmd).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_excludes_self_from_article_check() {
        let mut products = MockProductRepository::new();
        products
            .expect_find_by_id()
            .with(eq(ProductId(3)))
            .returning(|id| Ok(Some(stored_product(id.0))));
        products
            .expect_exists_by_article()
            .withf(|_, exclude| *exclude == Some(ProductId(3)))
            .returning(|_, _| Ok(false));
        products
            .expect_update()
            .withf(|p| p.name() == "Sofa Max")
            .times(1)
            .returning(|_| Ok(()));

        let handler = handler(products, known_reference(), MockProductWorkshopRepository::new());

        let cmd = UpdateProductCommand {
            product_id: ProductId(3),
            article: "SOFA-PRO".to_string(),
            name: "Sofa Max".to_string(),
            product_type_id: ProductTypeId(1),
            material_type_id: MaterialTypeId(1),
            min_price: Decimal::TEN,
        };
        assert!(handler.update_product(cmd).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let mut products = MockProductRepository::new();
        products.expect_find_by_id().returning(|_| Ok(None));
        products.expect_delete().never();

        let handler = handler(products, known_reference(), MockProductWorkshopRepository::new());

        let result = handler
            .delete_product(DeleteProductCommand {
                product_id: ProductId(404),
            })
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_calculate_raw_material_uses_reference_values() {
        let handler = handler(
            MockProductRepository::new(),
            known_reference(),
            MockProductWorkshopRepository::new(),
        );

        let outcome = handler
            .calculate_raw_material(CalculateRawMaterialCommand {
                product_type_id: ProductTypeId(1),
                material_type_id: MaterialTypeId(1),
                quantity: 1,
                param1: 2.5,
                param2: 1.8,
            })
            .await
            .unwrap();

        assert_eq!(outcome, RawMaterialOutcome::Success(6));
    }

    #[tokio::test]
    async fn test_calculate_raw_material_with_fractional_coefficients() {
        let mut reference = MockReferenceDataRepository::new();
        reference
            .expect_find_product_type()
            .with(eq(ProductTypeId(3)))
            .returning(|id| Ok(Some(ProductType::new(id, "Table", Decimal::new(235, 2)))));
        reference
            .expect_find_material_type()
            .with(eq(MaterialTypeId(2)))
            .returning(|id| Ok(Some(MaterialType::new(id, "Laminate", Decimal::new(8, 1)))));
        let handler = handler(
            MockProductRepository::new(),
            reference,
            MockProductWorkshopRepository::new(),
        );

        // 2.0 * 3.0 * 2.35 * 10 * 1.008 = 142.128
        let outcome = handler
            .calculate_raw_material(CalculateRawMaterialCommand {
                product_type_id: ProductTypeId(3),
                material_type_id: MaterialTypeId(2),
                quantity: 10,
                param1: 2.0,
                param2: 3.0,
            })
            .await
            .unwrap();

        assert_eq!(outcome, RawMaterialOutcome::Success(142));
    }

    #[tokio::test]
    async fn test_calculate_raw_material_reports_invalid_field() {
        let handler = handler(
            MockProductRepository::new(),
            known_reference(),
            MockProductWorkshopRepository::new(),
        );

        let outcome = handler
            .calculate_raw_material(CalculateRawMaterialCommand {
                product_type_id: ProductTypeId(1),
                material_type_id: MaterialTypeId(1),
                quantity: 0,
                param1: 2.5,
                param2: 1.8,
            })
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            RawMaterialOutcome::InvalidInput { field: "quantity", .. }
        ));
    }

    #[tokio::test]
    async fn test_calculate_raw_material_unknown_material() {
        let handler = handler(
            MockProductRepository::new(),
            known_reference(),
            MockProductWorkshopRepository::new(),
        );

        let result = handler
            .calculate_raw_material(CalculateRawMaterialCommand {
                product_type_id: ProductTypeId(1),
                material_type_id: MaterialTypeId(42),
                quantity: 1,
                param1: 1.0,
                param2: 1.0,
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_production_time_without_workshops() {
        let mut workshops = MockProductWorkshopRepository::new();
        workshops.expect_list_by_product().returning(|_| Ok(vec![]));

        let handler = handler(MockProductRepository::new(), known_reference(), workshops);

        let summary = handler
            .calculate_production_time(CalculateProductionTimeQuery {
                product_id: ProductId(1),
            })
            .await
            .unwrap();

        assert_eq!(summary, ProductionTimeSummary::empty());
    }

    #[tokio::test]
    async fn test_production_time_sums_workshops() {
        let mut workshops = MockProductWorkshopRepository::new();
        workshops.expect_list_by_product().returning(|_| {
            Ok(vec![
                ProductWorkshop {
                    workshop_id: WorkshopId(1),
                    workshop_name: "Раскройный".to_string(),
                    staff_count: 5,
                    manufacturing_hours: Decimal::new(25, 1),
                },
                ProductWorkshop {
                    workshop_id: WorkshopId(2),
                    workshop_name: "Сборочный".to_string(),
                    staff_count: 3,
                    manufacturing_hours: Decimal::new(15, 1),
                },
            ])
        });

        let handler = handler(MockProductRepository::new(), known_reference(), workshops);

        let summary = handler
            .calculate_production_time(CalculateProductionTimeQuery {
                product_id: ProductId(1),
            })
            .await
            .unwrap();

        assert_eq!(summary.total_hours, 4.0);
        assert_eq!(summary.workshop_count, 2);
        assert_eq!(summary.workshops_list, "Раскройный, Сборочный");
    }
}
