//! Business logic handler

use std::sync::Arc;

use chrono::Utc;
use stand_common::Listing;
use stand_errors::{AppError, AppResult};
use stand_telemetry::{record_duplicate_rejected, record_entity_created, record_report_generated};
use tracing::{debug, info, warn};

use crate::domain::entities::{Customer, NewCustomer, Product, TeamMember};
use crate::domain::enums::MemberStatus;
use crate::domain::repositories::{CustomerRepository, ProductRepository};
use crate::domain::services::{
    build_sales_report, customer_stats, customers_by_country, monthly_sales, products_with_sales,
    total_stats, ReportInputs, SalesLedger,
};
use crate::domain::value_objects::CustomerId;

use super::chat::{ChatSession, ChatSessionIssuer};
use super::commands::*;
use super::dto::*;
use super::queries::*;

pub struct ServiceHandler {
    product_repo: Arc<dyn ProductRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
    ledger: Arc<SalesLedger>,
    team: Vec<TeamMember>,
    chat_issuer: Option<Arc<dyn ChatSessionIssuer>>,
}

impl ServiceHandler {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        customer_repo: Arc<dyn CustomerRepository>,
        ledger: Arc<SalesLedger>,
        team: Vec<TeamMember>,
    ) -> Self {
        Self {
            product_repo,
            customer_repo,
            ledger,
            team,
            chat_issuer: None,
        }
    }

    pub fn with_chat_issuer(mut self, issuer: Arc<dyn ChatSessionIssuer>) -> Self {
        self.chat_issuer = Some(issuer);
        self
    }

    // ========== 商品 ==========

    /// 商品列表
    pub async fn list_products(&self, query: ListProductsQuery) -> AppResult<ProductListResponse> {
        let products = self.product_repo.list().await?;
        let total = products.len();

        let listing = Listing::new(
            products
                .into_iter()
                .filter(|p| query.filter.matches(p))
                .collect(),
            total,
        );
        debug!(total = listing.total, filtered = listing.filtered, "Listed products");

        Ok(ProductListResponse {
            products: listing.items,
            total: listing.total,
            filtered: listing.filtered,
        })
    }

    /// 获取商品（附带销售汇总）
    pub async fn get_product(&self, id: &str) -> AppResult<ProductResponse> {
        let product = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        products_with_sales(std::slice::from_ref(&product), self.ledger.records())
            .into_iter()
            .next()
            .map(|product| ProductResponse { product })
            .ok_or_else(|| AppError::internal("Product sales join returned no rows"))
    }

    /// 创建商品
    pub async fn create_product(
        &self,
        cmd: CreateProductCommand,
    ) -> AppResult<ProductCreatedResponse> {
        let product = cmd.validate()?;
        info!(id = %product.id, name = %product.name, "Creating product");

        let product = self
            .product_repo
            .insert_unique(product)
            .await
            .inspect_err(|e| reject_duplicate("product", e))?;

        record_entity_created("product");
        info!(id = %product.id, "Product created");
        Ok(ProductCreatedResponse {
            message: PRODUCT_CREATED.to_string(),
            product,
        })
    }

    // ========== 客户 ==========

    /// 客户列表（先过滤再分页）
    pub async fn list_customers(
        &self,
        query: ListCustomersQuery,
    ) -> AppResult<CustomerListResponse> {
        let customers = self.customer_repo.list().await?;
        let total = customers.len();

        let matched: Vec<Customer> = customers
            .into_iter()
            .filter(|c| query.filter.matches(c))
            .collect();
        let listing = Listing::new(query.pagination.apply(matched), total).map(CustomerView::from);

        Ok(CustomerListResponse {
            customers: listing.items,
            total: listing.total,
            filtered: listing.filtered,
        })
    }

    /// 获取客户
    pub async fn get_customer(&self, id: CustomerId) -> AppResult<CustomerResponse> {
        let customer = self
            .customer_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Customer not found"))?;

        Ok(CustomerResponse {
            customer: customer.into(),
        })
    }

    /// 创建客户
    pub async fn create_customer(
        &self,
        cmd: CreateCustomerCommand,
    ) -> AppResult<CustomerCreatedResponse> {
        let draft = cmd.validate()?;
        let customer = self.insert_customer(draft).await?;

        Ok(CustomerCreatedResponse {
            message: CUSTOMER_CREATED.to_string(),
            customer: customer.into(),
        })
    }

    /// 客户入驻
    pub async fn onboard_customer(
        &self,
        cmd: OnboardCustomerCommand,
    ) -> AppResult<OnboardingResult> {
        let draft = cmd.validate()?;
        let customer = self.insert_customer(draft).await.map_err(|e| match e {
            AppError::Conflict(_) => {
                AppError::conflict("A customer with this email already exists in the system.")
            }
            other => other,
        })?;

        Ok(OnboardingResult::welcome(customer))
    }

    async fn insert_customer(&self, draft: NewCustomer) -> AppResult<Customer> {
        info!(email = %draft.email, "Creating customer");

        let customer = self
            .customer_repo
            .insert_unique(draft)
            .await
            .inspect_err(|e| reject_duplicate("customer", e))?;

        record_entity_created("customer");
        info!(id = %customer.id, "Customer created");
        Ok(customer)
    }

    /// 客户统计与国家分布
    pub async fn customer_overview(&self) -> AppResult<CustomerOverview> {
        let customers = self.customer_repo.list().await?;

        Ok(CustomerOverview {
            stats: customer_stats(&customers),
            by_country: customers_by_country(&customers),
        })
    }

    // ========== 销售 ==========

    /// 仪表盘销售概览
    pub async fn sales_overview(&self) -> AppResult<SalesOverview> {
        let products = self.product_repo.list().await?;
        let records = self.ledger.records();

        Ok(SalesOverview {
            stats: total_stats(records, products.len()),
            monthly_sales: monthly_sales(records),
            products: products_with_sales(&products, records),
        })
    }

    /// 生成销售报表
    pub async fn sales_report(&self, query: SalesReportQuery) -> AppResult<SalesReportResponse> {
        let products: Vec<Product> = self.product_repo.list().await?;
        let customers = self.customer_repo.list().await?;

        let inputs = ReportInputs {
            products: &products,
            records: self.ledger.records(),
            customers: &customers,
        };
        let report = build_sales_report(inputs, &query.request, Utc::now());

        record_report_generated(report.report_type.as_str());
        info!(
            report_type = report.report_type.as_str(),
            months = report.monthly_sales.len(),
            "Sales report generated"
        );

        Ok(SalesReportResponse {
            message: REPORT_GENERATED.to_string(),
            report,
        })
    }

    // ========== 团队 ==========

    pub fn team(&self) -> TeamResponse {
        TeamResponse {
            members: self.team.clone(),
            total: self.team.len(),
            active_count: self
                .team
                .iter()
                .filter(|m| m.status == MemberStatus::Active)
                .count(),
        }
    }

    // ========== 聊天会话 ==========

    /// 换取聊天客户端令牌
    pub async fn issue_chat_session(&self, project_slug: Option<&str>) -> AppResult<ChatSession> {
        let issuer = self
            .chat_issuer
            .as_ref()
            .ok_or_else(|| AppError::unavailable("Chat session exchange is not configured"))?;

        issuer
            .issue(project_slug)
            .await
            .inspect_err(|e| warn!(error = %e, "Chat session exchange failed"))
    }
}

fn reject_duplicate(entity: &'static str, error: &AppError) {
    if matches!(error, AppError::Conflict(_)) {
        record_duplicate_rejected(entity);
        warn!(entity, "Rejected duplicate");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use stand_common::Pagination;

    use crate::domain::entities::CustomerFilter;
    use crate::domain::services::SalesGenerator;
    use crate::infrastructure::persistence::{
        seed_customers, seed_products, seed_team, InMemoryCustomerRepository,
        InMemoryProductRepository,
    };

    fn handler() -> ServiceHandler {
        let products = seed_products();
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let ledger = SalesGenerator::default().generate(&products, today, Some(7));

        ServiceHandler::new(
            Arc::new(InMemoryProductRepository::new(products)),
            Arc::new(InMemoryCustomerRepository::new(seed_customers())),
            Arc::new(ledger),
            seed_team(),
        )
    }

    struct FixedIssuer;

    #[async_trait]
    impl ChatSessionIssuer for FixedIssuer {
        async fn issue(&self, project_slug: Option<&str>) -> AppResult<ChatSession> {
            Ok(ChatSession {
                client_token: format!("token-{}", project_slug.unwrap_or("default")),
            })
        }
    }

    #[tokio::test]
    async fn test_created_product_visible_with_zero_sales() {
        let handler = handler();
        let cmd = CreateProductCommand {
            name: Some("Golden Banana".to_string()),
            price: Some(Decimal::new(199, 2)),
            category: Some("specialty".to_string()),
            ..Default::default()
        };

        let created = handler.create_product(cmd.clone()).await.unwrap();
        assert_eq!(created.product.id.as_str(), "golden-banana");
        assert_eq!(created.message, PRODUCT_CREATED);

        let fetched = handler.get_product("golden-banana").await.unwrap();
        assert_eq!(fetched.product.total_quantity, 0);

        let err = handler.create_product(cmd).await.unwrap_err();
        assert_eq!(err.status_code(), 409);
    }

    #[tokio::test]
    async fn test_seeded_product_has_sales() {
        let handler = handler();
        let response = handler.get_product("cavendish").await.unwrap();
        assert!(response.product.total_quantity > 0);

        let err = handler.get_product("kiwi").await.unwrap_err();
        assert_eq!(err.message(), "Product not found");
    }

    #[tokio::test]
    async fn test_list_customers_filters_then_paginates() {
        let handler = handler();
        let all = handler
            .list_customers(ListCustomersQuery::default())
            .await
            .unwrap();
        assert_eq!(all.filtered, all.total);

        let query = ListCustomersQuery {
            filter: CustomerFilter {
                country: Some("usa".to_string()),
            },
            pagination: Pagination::new(Some(2), Some(1)),
        };
        let page = handler.list_customers(query).await.unwrap();
        assert_eq!(page.filtered, 2);
        assert_eq!(page.total, all.total);
        assert!(page.customers.iter().all(|c| c.customer.country == "USA"));
    }

    #[tokio::test]
    async fn test_onboard_customer_summary() {
        let handler = handler();
        let cmd = OnboardCustomerCommand {
            name: "Ann Veal".to_string(),
            email: "ann.veal@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: "1 Harbor Rd".to_string(),
            city: "Newport Beach".to_string(),
            state: "CA".to_string(),
            zip: "92660".to_string(),
            country: "USA".to_string(),
        };

        let result = handler.onboard_customer(cmd.clone()).await.unwrap();
        assert!(result.success);
        assert_eq!(result.summary.tier, "Bronze (New Customer)");
        assert_eq!(result.summary.location, "Newport Beach, CA, USA");
        assert_eq!(result.next_steps.len(), 3);

        let err = handler.onboard_customer(cmd).await.unwrap_err();
        assert_eq!(
            err.message(),
            "A customer with this email already exists in the system."
        );
    }

    #[tokio::test]
    async fn test_report_counts_new_customers() {
        let handler = handler();
        let before = handler
            .sales_report(SalesReportQuery::default())
            .await
            .unwrap();

        handler
            .create_customer(CreateCustomerCommand {
                name: Some("Ann Veal".to_string()),
                email: Some("ann.veal@example.com".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let after = handler
            .sales_report(SalesReportQuery::default())
            .await
            .unwrap();
        assert_eq!(
            after.report.summary.total_customers,
            before.report.summary.total_customers + 1
        );
        assert_eq!(after.message, REPORT_GENERATED);
    }

    #[tokio::test]
    async fn test_team_counts_active() {
        let team = handler().team();
        assert_eq!(team.total, 8);
        assert_eq!(team.active_count, 6);
    }

    #[tokio::test]
    async fn test_chat_session_requires_issuer() {
        let err = handler().issue_chat_session(None).await.unwrap_err();
        assert_eq!(err.status_code(), 503);

        let handler = handler().with_chat_issuer(Arc::new(FixedIssuer));
        let session = handler.issue_chat_session(Some("demo")).await.unwrap();
        assert_eq!(session.client_token, "token-demo");
    }
}
