//! 内存持久化实现
//!
//! 所有数据保存在进程内存中，重启后恢复为种子数据

mod memory;
mod seed;

pub use memory::{InMemoryCustomerRepository, InMemoryProductRepository};
pub use seed::{seed_customers, seed_products, seed_team};
