//! 读模型视图

mod product_view;
mod product_workshop;

pub use product_view::ProductView;
pub use product_workshop::ProductWorkshop;
