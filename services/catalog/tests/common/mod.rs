//! 测试用内存仓储

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use catalog::application::ServiceHandler;
use catalog::domain::entities::{MaterialType, Product, ProductDraft, ProductType, Workshop};
use catalog::domain::repositories::{
    ProductRepository, ProductWorkshopRepository, ReferenceDataRepository,
};
use catalog::domain::value_objects::{
    Article, MaterialTypeId, ProductId, ProductTypeId, WorkshopId,
};
use catalog::domain::views::{ProductView, ProductWorkshop};
use chrono::Utc;
use pfs_common::AuditInfo;
use pfs_errors::{AppError, AppResult};
use rust_decimal::Decimal;

#[derive(Default)]
pub struct InMemoryCatalog {
    pub product_types: Vec<ProductType>,
    pub material_types: Vec<MaterialType>,
    pub workshops: Vec<Workshop>,
    /// (product_id, workshop_id, hours)
    pub assignments: Mutex<Vec<(ProductId, WorkshopId, Decimal)>>,
    pub products: Mutex<Vec<Product>>,
}

impl InMemoryCatalog {
    /// 带基础参考数据的目录
    pub fn seeded() -> Self {
        Self {
            product_types: vec![
                ProductType::new(ProductTypeId(1), "Гостиные", Decimal::new(35, 1)),
                ProductType::new(ProductTypeId(2), "Кресла", Decimal::new(12, 1)),
            ],
            material_types: vec![
                MaterialType::new(MaterialTypeId(1), "Мебельный щит", Decimal::new(5, 0)),
                MaterialType::new(MaterialTypeId(2), "Ламинат", Decimal::new(3, 0)),
            ],
            workshops: vec![
                Workshop::new(WorkshopId(1), "Проектный", "Проектирование", 4),
                Workshop::new(WorkshopId(2), "Раскройный", "Обработка", 5),
                Workshop::new(WorkshopId(3), "Сборочный", "Сборка", 6),
            ],
            ..Default::default()
        }
    }

    pub fn add_product(&self, id: i32, article: &str, name: &str) {
        let product = Product::new(
            ProductId(id),
            ProductDraft {
                article: Article::new(article).unwrap(),
                name: name.to_string(),
                product_type_id: ProductTypeId(1),
                material_type_id: MaterialTypeId(1),
                min_price: Decimal::new(100000, 2),
            },
            AuditInfo::new(),
        );
        self.products.lock().unwrap().push(product);
    }

    pub fn assign(&self, product_id: i32, workshop_id: i32, hours: Decimal) {
        self.assignments
            .lock()
            .unwrap()
            .push((ProductId(product_id), WorkshopId(workshop_id), hours));
    }

    fn view(&self, product: &Product) -> ProductView {
        let type_name = self
            .product_types
            .iter()
            .find(|t| t.id() == product.product_type_id())
            .map(|t| t.name().to_string())
            .unwrap_or_default();
        let material_name = self
            .material_types
            .iter()
            .find(|m| m.id() == product.material_type_id())
            .map(|m| m.name().to_string())
            .unwrap_or_default();

        ProductView {
            id: product.id(),
            article: product.article().to_string(),
            name: product.name().to_string(),
            min_price: product.min_price(),
            product_type_id: product.product_type_id(),
            material_type_id: product.material_type_id(),
            product_type_name: type_name,
            material_type_name: material_name,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }

    async fn find_view_by_id(&self, id: ProductId) -> AppResult<Option<ProductView>> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.id() == id).map(|p| self.view(p)))
    }

    async fn list_views(&self) -> AppResult<Vec<ProductView>> {
        let products = self.products.lock().unwrap();
        let mut views: Vec<ProductView> = products.iter().map(|p| self.view(p)).collect();
        views.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(views)
    }

    async fn exists_by_article(
        &self,
        article: &Article,
        exclude: Option<ProductId>,
    ) -> AppResult<bool> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.article() == article && Some(p.id()) != exclude))
    }

    async fn insert(&self, draft: &ProductDraft) -> AppResult<ProductId> {
        let mut products = self.products.lock().unwrap();
        let next = products.iter().map(|p| p.id().0).max().unwrap_or(0) + 1;
        products.push(Product::new(ProductId(next), draft.clone(), AuditInfo::new()));
        Ok(ProductId(next))
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let mut products = self.products.lock().unwrap();
        let slot = products
            .iter_mut()
            .find(|p| p.id() == product.id())
            .ok_or_else(|| AppError::not_found("Product not found"))?;
        *slot = product.clone();
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> AppResult<()> {
        self.assignments
            .lock()
            .unwrap()
            .retain(|(product_id, _, _)| *product_id != id);
        self.products.lock().unwrap().retain(|p| p.id() != id);
        Ok(())
    }
}

#[async_trait]
impl ReferenceDataRepository for InMemoryCatalog {
    async fn find_product_type(&self, id: ProductTypeId) -> AppResult<Option<ProductType>> {
        Ok(self.product_types.iter().find(|t| t.id() == id).cloned())
    }

    async fn find_material_type(&self, id: MaterialTypeId) -> AppResult<Option<MaterialType>> {
        Ok(self.material_types.iter().find(|m| m.id() == id).cloned())
    }

    async fn list_product_types(&self) -> AppResult<Vec<ProductType>> {
        Ok(self.product_types.clone())
    }

    async fn list_material_types(&self) -> AppResult<Vec<MaterialType>> {
        Ok(self.material_types.clone())
    }

    async fn list_workshops(&self) -> AppResult<Vec<Workshop>> {
        Ok(self.workshops.clone())
    }
}

#[async_trait]
impl ProductWorkshopRepository for InMemoryCatalog {
    async fn list_by_product(&self, product_id: ProductId) -> AppResult<Vec<ProductWorkshop>> {
        let mut rows: Vec<ProductWorkshop> = self
            .assignments
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _, _)| *id == product_id)
            .filter_map(|(_, workshop_id, hours)| {
                self.workshops
                    .iter()
                    .find(|w| w.id() == *workshop_id)
                    .map(|w| ProductWorkshop {
                        workshop_id: w.id(),
                        workshop_name: w.name().to_string(),
                        staff_count: w.staff_count(),
                        manufacturing_hours: *hours,
                    })
            })
            .collect();
        rows.sort_by(|a, b| b.manufacturing_hours.cmp(&a.manufacturing_hours));
        Ok(rows)
    }
}

pub fn handler(catalog: Arc<InMemoryCatalog>) -> Arc<ServiceHandler> {
    Arc::new(ServiceHandler::new(
        catalog.clone(),
        catalog.clone(),
        catalog,
    ))
}
