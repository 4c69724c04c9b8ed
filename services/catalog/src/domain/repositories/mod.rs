//! 仓储接口

mod product_repository;
mod product_workshop_repository;
mod reference_data_repository;

pub use product_repository::ProductRepository;
pub use product_workshop_repository::ProductWorkshopRepository;
pub use reference_data_repository::ReferenceDataRepository;

#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use product_workshop_repository::MockProductWorkshopRepository;
#[cfg(test)]
pub use reference_data_repository::MockReferenceDataRepository;
