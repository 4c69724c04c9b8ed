//! catalog Service - Furniture Product Catalog

use std::sync::Arc;

use catalog::api::routes;
use catalog::application::ServiceHandler;
use catalog::infrastructure::persistence::{
    PostgresProductRepository, PostgresProductWorkshopRepository, PostgresReferenceDataRepository,
};
use pfs_bootstrap::{Infrastructure, run_http};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_http("config", |infra: Infrastructure| async move {
        info!("Initializing catalog Service...");

        let pool = infra.postgres_pool();
        let product_repo = Arc::new(PostgresProductRepository::new(pool.clone()));
        let reference_repo = Arc::new(PostgresReferenceDataRepository::new(pool.clone()));
        let workshop_repo = Arc::new(PostgresProductWorkshopRepository::new(pool));
        info!("Repositories initialized");

        let handler = Arc::new(ServiceHandler::new(product_repo, reference_repo, workshop_repo));

        Ok(routes(handler))
    })
    .await
}
