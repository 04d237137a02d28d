//! 读操作查询

use stand_common::Pagination;

use crate::domain::entities::{CustomerFilter, ProductFilter};
use crate::domain::services::ReportRequest;

/// 商品列表查询
#[derive(Debug, Clone, Default)]
pub struct ListProductsQuery {
    pub filter: ProductFilter,
}

/// 客户列表查询
#[derive(Debug, Clone, Default)]
pub struct ListCustomersQuery {
    pub filter: CustomerFilter,
    pub pagination: Pagination,
}

/// 销售报表查询
#[derive(Debug, Clone, Default)]
pub struct SalesReportQuery {
    pub request: ReportRequest,
}
