//! Commands

mod calculation_commands;
mod product_commands;

pub use calculation_commands::*;
pub use product_commands::*;
