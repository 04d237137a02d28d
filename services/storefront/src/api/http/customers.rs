//! 客户接口

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use stand_common::Pagination;
use stand_errors::{AppError, AppResult};

use crate::application::{
    CreateCustomerCommand, CustomerCreatedResponse, CustomerListResponse, CustomerOverview,
    CustomerResponse, ListCustomersQuery, ServiceHandler,
};
use crate::domain::entities::CustomerFilter;
use crate::domain::value_objects::CustomerId;

use super::extract::{ApiJson, ApiQuery};

#[derive(Debug, Default, Deserialize)]
pub struct CustomerListParams {
    pub country: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl CustomerListParams {
    fn into_query(self) -> AppResult<ListCustomersQuery> {
        Ok(ListCustomersQuery {
            filter: CustomerFilter {
                country: self.country.filter(|c| !c.trim().is_empty()),
            },
            pagination: Pagination::new(
                parse_count("limit", self.limit)?,
                parse_count("offset", self.offset)?,
            ),
        })
    }
}

fn parse_count(field: &str, value: Option<String>) -> AppResult<Option<usize>> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| {
            v.trim().parse::<usize>().map_err(|_| {
                AppError::validation(format!("{field} must be a non-negative integer"))
            })
        })
        .transpose()
}

pub(super) async fn list_customers(
    State(handler): State<Arc<ServiceHandler>>,
    ApiQuery(params): ApiQuery<CustomerListParams>,
) -> AppResult<Json<CustomerListResponse>> {
    let query = params.into_query()?;
    Ok(Json(handler.list_customers(query).await?))
}

pub(super) async fn get_customer(
    State(handler): State<Arc<ServiceHandler>>,
    Path(id): Path<String>,
) -> AppResult<Json<CustomerResponse>> {
    let id: CustomerId = id
        .parse()
        .map_err(|_| AppError::validation("Invalid customer ID"))?;
    Ok(Json(handler.get_customer(id).await?))
}

pub(super) async fn create_customer(
    State(handler): State<Arc<ServiceHandler>>,
    ApiJson(cmd): ApiJson<CreateCustomerCommand>,
) -> AppResult<(StatusCode, Json<CustomerCreatedResponse>)> {
    let created = handler.create_customer(cmd).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub(super) async fn customer_overview(
    State(handler): State<Arc<ServiceHandler>>,
) -> AppResult<Json<CustomerOverview>> {
    Ok(Json(handler.customer_overview().await?))
}
