//! 值对象

mod email;
mod ids;
mod product_slug;

pub use email::*;
pub use ids::*;
pub use product_slug::*;
