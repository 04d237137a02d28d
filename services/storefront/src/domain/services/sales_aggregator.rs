//! 销售聚合
//!
//! 对不可变的销售记录做单遍分组求和，不缓存，每次调用重新计算。
//! 收入只在分组求和结束后取整一次。

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use stand_domain_core::Money;

use crate::domain::entities::{Customer, Product, SaleRecord};
use crate::domain::value_objects::ProductSlug;

/// 单个商品的销售汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_id: ProductSlug,
    pub total_quantity: u64,
    pub total_revenue: Money,
}

/// 月度销售汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySales {
    /// `YYYY-MM`
    pub month: String,
    pub revenue: Money,
    pub quantity: u64,
}

/// 全局销售指标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalStats {
    pub total_revenue: Money,
    pub total_quantity: u64,
    pub active_products: usize,
    pub avg_order_value: Money,
}

/// 附带销售汇总的商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithSales {
    #[serde(flatten)]
    pub product: Product,
    pub total_quantity: u64,
    pub total_revenue: Money,
}

/// 按国家的客户汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    pub country: String,
    pub count: usize,
    pub total_orders: u64,
}

/// 客户总体指标
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStats {
    pub total_customers: usize,
    pub total_orders: u64,
    pub countries: usize,
}

/// 按商品分组，顺序为商品首次出现的顺序
pub fn product_sales(records: &[SaleRecord]) -> Vec<ProductSales> {
    let mut index: HashMap<&ProductSlug, usize> = HashMap::new();
    let mut totals: Vec<ProductSales> = Vec::new();

    for record in records {
        let slot = *index.entry(&record.product_id).or_insert_with(|| {
            totals.push(ProductSales {
                product_id: record.product_id.clone(),
                total_quantity: 0,
                total_revenue: Money::zero(),
            });
            totals.len() - 1
        });

        let entry = &mut totals[slot];
        entry.total_quantity += record.quantity;
        entry.total_revenue = entry.total_revenue + record.revenue;
    }

    for entry in &mut totals {
        entry.total_revenue = entry.total_revenue.rounded();
    }
    totals
}

/// 按月份分组，按月份升序
pub fn monthly_sales(records: &[SaleRecord]) -> Vec<MonthlySales> {
    let mut by_month: BTreeMap<String, (Money, u64)> = BTreeMap::new();

    for record in records {
        let (revenue, quantity) = by_month.entry(record.month()).or_default();
        *revenue = *revenue + record.revenue;
        *quantity += record.quantity;
    }

    by_month
        .into_iter()
        .map(|(month, (revenue, quantity))| MonthlySales {
            month,
            revenue: revenue.rounded(),
            quantity,
        })
        .collect()
}

/// 全局指标
///
/// 平均单价 = 总收入 / 总销量，销量为零时按 1 计算
pub fn total_stats(records: &[SaleRecord], active_products: usize) -> TotalStats {
    let per_product = product_sales(records);
    let total_revenue: Money = per_product.iter().map(|p| p.total_revenue).sum();
    let total_quantity: u64 = per_product.iter().map(|p| p.total_quantity).sum();
    let total_revenue = total_revenue.rounded();

    TotalStats {
        total_revenue,
        total_quantity,
        active_products,
        avg_order_value: total_revenue.per_unit(total_quantity).rounded(),
    }
}

/// 将目录中每个商品与其销售汇总合并，无销售记录的商品汇总为零
pub fn products_with_sales(products: &[Product], records: &[SaleRecord]) -> Vec<ProductWithSales> {
    let sales: HashMap<ProductSlug, ProductSales> = product_sales(records)
        .into_iter()
        .map(|s| (s.product_id.clone(), s))
        .collect();

    products
        .iter()
        .map(|product| {
            let (total_quantity, total_revenue) = sales
                .get(&product.id)
                .map(|s| (s.total_quantity, s.total_revenue))
                .unwrap_or((0, Money::zero()));
            ProductWithSales {
                product: product.clone(),
                total_quantity,
                total_revenue,
            }
        })
        .collect()
}

/// 按国家分组，按订单总数降序，订单数相同按国家名升序
pub fn customers_by_country(customers: &[Customer]) -> Vec<CountrySummary> {
    let mut by_country: HashMap<&str, CountrySummary> = HashMap::new();

    for customer in customers {
        let entry = by_country
            .entry(customer.country.as_str())
            .or_insert_with(|| CountrySummary {
                country: customer.country.clone(),
                count: 0,
                total_orders: 0,
            });
        entry.count += 1;
        entry.total_orders += u64::from(customer.order_count);
    }

    let mut summaries: Vec<CountrySummary> = by_country.into_values().collect();
    summaries.sort_by(|a, b| {
        b.total_orders
            .cmp(&a.total_orders)
            .then_with(|| a.country.cmp(&b.country))
    });
    summaries
}

/// 客户总体指标
pub fn customer_stats(customers: &[Customer]) -> CustomerStats {
    let countries: HashSet<&str> = customers.iter().map(|c| c.country.as_str()).collect();

    CustomerStats {
        total_customers: customers.len(),
        total_orders: customers.iter().map(|c| u64::from(c.order_count)).sum(),
        countries: countries.len(),
    }
}
