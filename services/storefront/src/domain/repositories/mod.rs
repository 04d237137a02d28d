//! 仓储接口

mod customer_repository;
mod product_repository;

pub use customer_repository::*;
pub use product_repository::*;
