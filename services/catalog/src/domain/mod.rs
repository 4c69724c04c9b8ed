//! 领域层
//!
//! 包含业务实体、值对象、视图、仓储接口和计算引擎

pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;
pub mod views;

pub use entities::*;
pub use repositories::*;
pub use services::*;
pub use value_objects::*;
pub use views::*;
