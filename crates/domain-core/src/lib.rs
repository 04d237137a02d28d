//! domain-core - 跨 context 的领域核心类型
//!
//! 包含极少数需要跨模块共享的值对象

mod entity;
mod money;

pub use entity::*;
pub use money::*;

pub use rust_decimal::Decimal;
