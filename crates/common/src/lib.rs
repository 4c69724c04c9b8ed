//! common - 通用类型

pub mod health;
pub mod types;

pub use health::*;
pub use types::*;
