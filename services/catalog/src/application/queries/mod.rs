//! Queries

mod product_queries;

pub use product_queries::*;
