//! 销售报表构建

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use stand_domain_core::Money;

use crate::domain::entities::{Customer, Product, SaleRecord};
use crate::domain::enums::ProductCategory;
use crate::domain::value_objects::ProductSlug;

use super::sales_aggregator::{
    customer_stats, customers_by_country, monthly_sales, products_with_sales, total_stats,
    CountrySummary, MonthlySales, ProductWithSales,
};

/// 榜单长度
const TOP_PRODUCTS: usize = 5;
/// 国家榜单长度
const TOP_COUNTRIES: usize = 10;

/// 报表类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Full,
    Summary,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Summary => "summary",
        }
    }
}

/// 报表请求
///
/// 起止月份为 `YYYY-MM`，按字符串比较过滤月度序列
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub report_type: ReportType,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ReportRequest {
    /// 空字符串视为未提供
    pub fn new(
        report_type: ReportType,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Self {
        let non_empty = |s: Option<String>| s.filter(|s| !s.trim().is_empty());
        Self {
            report_type,
            start_date: non_empty(start_date),
            end_date: non_empty(end_date),
        }
    }
}

/// 报表数据来源（同一时刻的快照）
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub products: &'a [Product],
    pub records: &'a [SaleRecord],
    pub customers: &'a [Customer],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_revenue: Money,
    pub total_units_sold: u64,
    pub active_products: usize,
    pub average_price: Money,
    pub total_customers: usize,
    pub total_customer_orders: u64,
    pub countries_served: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSellingProduct {
    pub id: ProductSlug,
    pub name: String,
    pub category: ProductCategory,
    pub revenue: Money,
    pub units_sold: u64,
    pub price: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularProduct {
    pub id: ProductSlug,
    pub name: String,
    pub category: ProductCategory,
    pub units_sold: u64,
    pub revenue: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: ProductCategory,
    pub revenue: Money,
    pub units_sold: u64,
    pub product_count: usize,
}

/// 销售报表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub generated_at: DateTime<Utc>,
    pub report_type: ReportType,
    pub date_range: DateRange,
    pub summary: ReportSummary,
    pub monthly_sales: Vec<MonthlySales>,
    pub top_selling_products: Vec<TopSellingProduct>,
    pub most_popular_products: Vec<PopularProduct>,
    pub category_breakdown: Vec<CategoryBreakdown>,
    pub top_customer_countries: Vec<CountrySummary>,
}

/// 构建销售报表
pub fn build_sales_report(
    inputs: ReportInputs<'_>,
    request: &ReportRequest,
    generated_at: DateTime<Utc>,
) -> SalesReport {
    let stats = total_stats(inputs.records, inputs.products.len());
    let months = monthly_sales(inputs.records);
    let products = products_with_sales(inputs.products, inputs.records);
    let customers = customer_stats(inputs.customers);

    let date_range = DateRange {
        start: request
            .start_date
            .clone()
            .or_else(|| months.first().map(|m| m.month.clone())),
        end: request
            .end_date
            .clone()
            .or_else(|| months.last().map(|m| m.month.clone())),
    };

    let monthly_sales = filter_months(months, request);

    let mut by_revenue = products.clone();
    by_revenue.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));
    let top_selling_products = by_revenue
        .into_iter()
        .take(TOP_PRODUCTS)
        .map(|p| TopSellingProduct {
            id: p.product.id,
            name: p.product.name,
            category: p.product.category,
            revenue: p.total_revenue,
            units_sold: p.total_quantity,
            price: p.product.price,
        })
        .collect();

    let mut by_quantity = products.clone();
    by_quantity.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
    let most_popular_products = by_quantity
        .into_iter()
        .take(TOP_PRODUCTS)
        .map(|p| PopularProduct {
            id: p.product.id,
            name: p.product.name,
            category: p.product.category,
            units_sold: p.total_quantity,
            revenue: p.total_revenue,
        })
        .collect();

    let mut top_customer_countries = customers_by_country(inputs.customers);
    top_customer_countries.truncate(TOP_COUNTRIES);

    SalesReport {
        generated_at,
        report_type: request.report_type,
        date_range,
        summary: ReportSummary {
            total_revenue: stats.total_revenue,
            total_units_sold: stats.total_quantity,
            active_products: stats.active_products,
            average_price: stats.avg_order_value,
            total_customers: customers.total_customers,
            total_customer_orders: customers.total_orders,
            countries_served: customers.countries,
        },
        monthly_sales,
        top_selling_products,
        most_popular_products,
        category_breakdown: category_breakdown(&products),
        top_customer_countries,
    }
}

fn filter_months(months: Vec<MonthlySales>, request: &ReportRequest) -> Vec<MonthlySales> {
    months
        .into_iter()
        .filter(|m| {
            request
                .start_date
                .as_deref()
                .is_none_or(|start| m.month.as_str() >= start)
        })
        .filter(|m| {
            request
                .end_date
                .as_deref()
                .is_none_or(|end| m.month.as_str() <= end)
        })
        .collect()
}

/// 分类汇总，分类顺序为首次出现的顺序
fn category_breakdown(products: &[ProductWithSales]) -> Vec<CategoryBreakdown> {
    let mut breakdown: Vec<CategoryBreakdown> = Vec::new();

    for p in products {
        let category = p.product.category;
        let slot = match breakdown.iter().position(|c| c.category == category) {
            Some(slot) => slot,
            None => {
                breakdown.push(CategoryBreakdown {
                    category,
                    revenue: Money::zero(),
                    units_sold: 0,
                    product_count: 0,
                });
                breakdown.len() - 1
            }
        };

        let entry = &mut breakdown[slot];
        entry.revenue = entry.revenue + p.total_revenue;
        entry.units_sold += p.total_quantity;
        entry.product_count += 1;
    }

    for entry in &mut breakdown {
        entry.revenue = entry.revenue.rounded();
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    use crate::infrastructure::persistence::{seed_customers, seed_products};

    fn sale(id: &str, (y, m, d): (i32, u32, u32), quantity: u64, cents: i64) -> SaleRecord {
        SaleRecord {
            product_id: ProductSlug::from_name(id).unwrap(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            quantity,
            revenue: Money::from_cents(cents),
        }
    }

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn fixture() -> (Vec<Product>, Vec<SaleRecord>, Vec<Customer>) {
        let records = vec![
            sale("cavendish", (2025, 1, 3), 500, 14500),
            sale("red-banana", (2025, 1, 3), 20, 1780),
            sale("plantain", (2025, 2, 3), 100, 5900),
            sale("organic-cavendish", (2025, 3, 3), 300, 13500),
            sale("manzano", (2025, 4, 3), 60, 4740),
            sale("burro-banana", (2025, 4, 4), 10, 690),
        ];
        (seed_products(), records, seed_customers())
    }

    #[test]
    fn test_full_report_sections() {
        let (products, records, customers) = fixture();
        let inputs = ReportInputs {
            products: &products,
            records: &records,
            customers: &customers,
        };

        let report = build_sales_report(inputs, &ReportRequest::default(), generated_at());

        assert_eq!(report.report_type, ReportType::Full);
        assert_eq!(report.date_range.start.as_deref(), Some("2025-01"));
        assert_eq!(report.date_range.end.as_deref(), Some("2025-04"));
        assert_eq!(report.monthly_sales.len(), 4);
        assert_eq!(report.summary.active_products, products.len());
        assert_eq!(report.summary.total_units_sold, 990);
        assert_eq!(report.summary.total_revenue, Money::from_cents(41110));

        assert_eq!(report.top_selling_products.len(), 5);
        assert_eq!(report.top_selling_products[0].id.as_str(), "cavendish");
        assert_eq!(report.top_selling_products[1].id.as_str(), "organic-cavendish");

        assert_eq!(report.most_popular_products[0].units_sold, 500);
        assert_eq!(report.most_popular_products[1].units_sold, 300);

        assert!(report.top_customer_countries.len() <= 10);
        assert_eq!(report.summary.total_customers, customers.len());
    }

    #[test]
    fn test_category_breakdown_covers_all_products() {
        let (products, records, customers) = fixture();
        let inputs = ReportInputs {
            products: &products,
            records: &records,
            customers: &customers,
        };

        let report = build_sales_report(inputs, &ReportRequest::default(), generated_at());
        let categories: Vec<ProductCategory> =
            report.category_breakdown.iter().map(|c| c.category).collect();
        assert_eq!(
            categories,
            vec![
                ProductCategory::Fresh,
                ProductCategory::Specialty,
                ProductCategory::Organic
            ]
        );

        let product_count: usize = report.category_breakdown.iter().map(|c| c.product_count).sum();
        assert_eq!(product_count, products.len());

        let fresh = &report.category_breakdown[0];
        assert_eq!(fresh.units_sold, 600);
        assert_eq!(fresh.revenue, Money::from_cents(20400));
    }

    #[test]
    fn test_date_range_filters_months_by_string_compare() {
        let (products, records, customers) = fixture();
        let inputs = ReportInputs {
            products: &products,
            records: &records,
            customers: &customers,
        };
        let request = ReportRequest::new(
            ReportType::Summary,
            Some("2025-02".to_string()),
            Some("2025-03".to_string()),
        );

        let report = build_sales_report(inputs, &request, generated_at());
        let months: Vec<&str> = report.monthly_sales.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["2025-02", "2025-03"]);
        assert_eq!(report.date_range.start.as_deref(), Some("2025-02"));
        assert_eq!(report.report_type, ReportType::Summary);
    }

    #[test]
    fn test_empty_bounds_are_ignored() {
        let request =
            ReportRequest::new(ReportType::Full, Some(" ".to_string()), Some(String::new()));
        assert!(request.start_date.is_none());
        assert!(request.end_date.is_none());
    }

    #[test]
    fn test_empty_ledger_has_null_range() {
        let products = seed_products();
        let inputs = ReportInputs {
            products: &products,
            records: &[],
            customers: &[],
        };

        let report = build_sales_report(inputs, &ReportRequest::default(), generated_at());
        assert!(report.date_range.start.is_none());
        assert!(report.date_range.end.is_none());
        assert!(report.monthly_sales.is_empty());
        assert!(report.summary.average_price.is_zero());
        assert!(report.top_customer_countries.is_empty());

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["dateRange"]["start"].is_null());
    }
}
