//! 领域枚举

mod customer_tier;
mod member_status;
mod product_category;

pub use customer_tier::*;
pub use member_status::*;
pub use product_category::*;
