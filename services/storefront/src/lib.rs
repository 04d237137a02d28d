//! nanoBanana Stand 店铺服务
//!
//! 内存中的商品与客户、模拟销售账本，以及基于账本的聚合报表

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use axum::Router;
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use stand_bootstrap::{health_routes, metrics_routes};
use stand_config::AppConfig;
use stand_errors::AppResult;
use tracing::info;

use application::ServiceHandler;
use domain::services::SalesGenerator;
use infrastructure::chat::HostedSessionClient;
use infrastructure::persistence::{
    seed_customers, seed_products, seed_team, InMemoryCustomerRepository,
    InMemoryProductRepository,
};

/// 就绪检查上报的组件
pub const COMPONENTS: [&str; 3] = ["products", "customers", "sales-ledger"];

/// 按配置装配业务处理器
///
/// 销售账本以 `today` 为锚点只生成一次
pub fn build_handler(config: &AppConfig, today: NaiveDate) -> AppResult<ServiceHandler> {
    let products = seed_products();
    let customers = seed_customers();

    let generator = SalesGenerator::from_config(&config.sales)?;
    let ledger = generator.generate(&products, today, config.sales.seed);
    info!(
        products = products.len(),
        customers = customers.len(),
        records = ledger.len(),
        "Stores seeded"
    );

    let handler = ServiceHandler::new(
        Arc::new(InMemoryProductRepository::new(products)),
        Arc::new(InMemoryCustomerRepository::new(customers)),
        Arc::new(ledger),
        seed_team(),
    );

    match &config.chat {
        Some(chat) => {
            info!(project = %chat.project_slug, "Chat session exchange enabled");
            Ok(handler.with_chat_issuer(Arc::new(HostedSessionClient::from_config(chat)?)))
        }
        None => Ok(handler),
    }
}

/// 组装完整的 HTTP 应用
pub fn build_app(handler: Arc<ServiceHandler>, metrics: Option<PrometheusHandle>) -> Router {
    let app = api::router(handler).merge(health_routes(&COMPONENTS));
    let app = match metrics {
        Some(handle) => app.merge(metrics_routes(handle)),
        None => app,
    };
    app.fallback(api::not_found)
}
