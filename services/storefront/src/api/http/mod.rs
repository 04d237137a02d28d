//! HTTP JSON 接口

mod customers;
mod extract;
mod products;
mod reports;
mod routes;
mod sales;
mod session;
mod team;

pub use extract::{ApiJson, ApiQuery};
pub use routes::{not_found, router};
