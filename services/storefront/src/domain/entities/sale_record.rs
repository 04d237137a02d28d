//! 销售记录

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stand_domain_core::Money;

use crate::domain::value_objects::ProductSlug;

/// 单个商品单日的销售记录，生成后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub product_id: ProductSlug,
    pub date: NaiveDate,
    pub quantity: u64,
    pub revenue: Money,
}

impl SaleRecord {
    /// 月份键 `YYYY-MM`
    pub fn month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}
