//! 销售概览接口

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use stand_errors::AppResult;

use crate::application::{SalesOverview, ServiceHandler};

pub(super) async fn sales_overview(
    State(handler): State<Arc<ServiceHandler>>,
) -> AppResult<Json<SalesOverview>> {
    Ok(Json(handler.sales_overview().await?))
}
