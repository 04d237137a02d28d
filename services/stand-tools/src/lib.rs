//! stand-tools - 店铺操作的工具调用适配器
//!
//! 通过 stdio 上逐行的 JSON-RPC 2.0 消息，把店铺的查询与写操作暴露为可调用工具

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::ToolServer;
pub use tools::{ToolError, ToolRegistry};
