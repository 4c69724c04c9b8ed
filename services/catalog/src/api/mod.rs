//! API layer - HTTP JSON endpoints

mod conversions;
pub mod dto;
mod routes;

pub use routes::routes;
