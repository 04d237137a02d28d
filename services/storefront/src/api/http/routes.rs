//! API 路由

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use stand_errors::AppError;

use crate::application::ServiceHandler;

use super::{customers, products, reports, sales, session, team};

/// 业务路由
///
/// 已知路径上的其他方法返回 405，未知路径返回 404
pub fn router(handler: Arc<ServiceHandler>) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(products::list_products)
                .post(products::create_product)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/products/{id}",
            get(products::get_product).fallback(method_not_allowed),
        )
        .route(
            "/api/customers",
            get(customers::list_customers)
                .post(customers::create_customer)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/customers/stats",
            get(customers::customer_overview).fallback(method_not_allowed),
        )
        .route(
            "/api/customers/{id}",
            get(customers::get_customer).fallback(method_not_allowed),
        )
        .route(
            "/api/reports/sales",
            post(reports::create_sales_report).fallback(method_not_allowed),
        )
        .route(
            "/api/sales/overview",
            get(sales::sales_overview).fallback(method_not_allowed),
        )
        .route("/api/team", get(team::list_team).fallback(method_not_allowed))
        .route(
            "/api/session",
            post(session::create_session).fallback(method_not_allowed),
        )
        .with_state(handler)
}

pub(crate) async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub async fn not_found() -> AppError {
    AppError::not_found("Not found")
}
