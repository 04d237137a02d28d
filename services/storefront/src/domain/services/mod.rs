//! 销售领域服务
//!
//! 模拟销售数据生成、聚合与报表构建，均为纯计算

pub mod report_builder;
pub mod sales_aggregator;
pub mod sales_generator;

pub use report_builder::*;
pub use sales_aggregator::*;
pub use sales_generator::*;
