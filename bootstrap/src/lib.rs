//! stand-bootstrap - 统一服务启动骨架
//!
//! 运行时初始化、健康检查路由与 HTTP 服务启动

mod health;
mod runtime;
mod starter;

pub use health::*;
pub use runtime::*;
pub use starter::*;
