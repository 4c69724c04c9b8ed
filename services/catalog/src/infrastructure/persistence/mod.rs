//! Persistence implementations

mod converters;
mod postgres;
mod rows;

pub use postgres::{
    PostgresProductRepository, PostgresProductWorkshopRepository, PostgresReferenceDataRepository,
};
