//! 实体模块

mod material_type;
mod product;
mod product_type;
mod workshop;

pub use material_type::MaterialType;
pub use product::{MAX_NAME_LENGTH, Product, ProductDraft};
pub use product_type::ProductType;
pub use workshop::Workshop;
