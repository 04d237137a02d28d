//! 对外响应结构
//!
//! 字段名统一为 camelCase

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Customer, Product, TeamMember};
use crate::domain::enums::CustomerTier;
use crate::domain::services::{
    CountrySummary, CustomerStats, MonthlySales, ProductWithSales, SalesReport, TotalStats,
};

pub const PRODUCT_CREATED: &str = "Product created successfully";
pub const CUSTOMER_CREATED: &str = "Customer created successfully";
pub const REPORT_GENERATED: &str = "Sales report generated successfully";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total: usize,
    pub filtered: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub product: ProductWithSales,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreatedResponse {
    pub message: String,
    pub product: Product,
}

/// 客户及其派生等级
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerView {
    #[serde(flatten)]
    pub customer: Customer,
    pub tier: CustomerTier,
}

impl From<Customer> for CustomerView {
    fn from(customer: Customer) -> Self {
        Self {
            tier: customer.tier(),
            customer,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerListResponse {
    pub customers: Vec<CustomerView>,
    pub total: usize,
    pub filtered: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub customer: CustomerView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreatedResponse {
    pub message: String,
    pub customer: CustomerView,
}

/// 客户统计与国家分布
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOverview {
    pub stats: CustomerStats,
    pub by_country: Vec<CountrySummary>,
}

/// 入驻欢迎摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingSummary {
    pub customer_id: u32,
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub status: String,
    pub tier: String,
}

/// 入驻结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResult {
    pub success: bool,
    pub message: String,
    pub customer: CustomerView,
    pub summary: OnboardingSummary,
    pub next_steps: Vec<String>,
}

impl OnboardingResult {
    pub fn welcome(customer: Customer) -> Self {
        let summary = OnboardingSummary {
            customer_id: customer.id.0,
            full_name: customer.name.clone(),
            email: customer.email.to_string(),
            location: customer.location(),
            status: "Active".to_string(),
            tier: format!("{} (New Customer)", customer.tier().label()),
        };

        Self {
            success: true,
            message: format!("Customer \"{}\" has been successfully onboarded!", customer.name),
            customer: customer.into(),
            summary,
            next_steps: [
                "Customer can now place orders",
                "Send welcome email with account details",
                "Assign a sales representative if needed",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReportResponse {
    pub message: String,
    pub report: SalesReport,
}

/// 仪表盘销售概览
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOverview {
    pub stats: TotalStats,
    pub monthly_sales: Vec<MonthlySales>,
    pub products: Vec<ProductWithSales>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub members: Vec<TeamMember>,
    pub total: usize,
    pub active_count: usize,
}
