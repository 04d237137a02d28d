//! 基础设施层

pub mod chat;
pub mod persistence;
