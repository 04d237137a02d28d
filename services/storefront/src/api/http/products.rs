//! 商品接口

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use stand_errors::{AppError, AppResult};

use crate::application::{
    CreateProductCommand, ListProductsQuery, ProductCreatedResponse, ProductListResponse,
    ProductResponse, ServiceHandler,
};
use crate::domain::entities::ProductFilter;
use crate::domain::enums::ProductCategory;

use super::extract::{ApiJson, ApiQuery};

/// 列表过滤参数，空字符串视为未提供
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListParams {
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl ProductListParams {
    fn into_query(self) -> AppResult<ListProductsQuery> {
        let category = present(self.category)
            .map(|c| ProductCategory::from_str(&c))
            .transpose()
            .map_err(|e| AppError::validation(e.to_string()))?;

        Ok(ListProductsQuery {
            filter: ProductFilter {
                category,
                min_price: parse_price("minPrice", self.min_price)?,
                max_price: parse_price("maxPrice", self.max_price)?,
            },
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_price(field: &str, value: Option<String>) -> AppResult<Option<Decimal>> {
    present(value)
        .map(|v| {
            Decimal::from_str(&v)
                .map_err(|_| AppError::validation(format!("{field} must be a number")))
        })
        .transpose()
}

pub(super) async fn list_products(
    State(handler): State<Arc<ServiceHandler>>,
    ApiQuery(params): ApiQuery<ProductListParams>,
) -> AppResult<Json<ProductListResponse>> {
    let query = params.into_query()?;
    Ok(Json(handler.list_products(query).await?))
}

pub(super) async fn get_product(
    State(handler): State<Arc<ServiceHandler>>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductResponse>> {
    Ok(Json(handler.get_product(&id).await?))
}

pub(super) async fn create_product(
    State(handler): State<Arc<ServiceHandler>>,
    ApiJson(cmd): ApiJson<CreateProductCommand>,
) -> AppResult<(StatusCode, Json<ProductCreatedResponse>)> {
    let created = handler.create_product(cmd).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
