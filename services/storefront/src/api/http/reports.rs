//! 报表接口

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use stand_errors::AppResult;

use crate::application::{SalesReportQuery, SalesReportResponse, ServiceHandler};
use crate::domain::services::{ReportRequest, ReportType};

/// 报表请求体，所有字段可选
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportBody {
    #[serde(rename = "type", default)]
    report_type: ReportType,
    start_date: Option<String>,
    end_date: Option<String>,
}

/// 空请求体按默认参数生成
pub(super) async fn create_sales_report(
    State(handler): State<Arc<ServiceHandler>>,
    body: Bytes,
) -> AppResult<Json<SalesReportResponse>> {
    let body: ReportBody = if body.iter().all(u8::is_ascii_whitespace) {
        ReportBody::default()
    } else {
        serde_json::from_slice(&body)?
    };

    let query = SalesReportQuery {
        request: ReportRequest::new(body.report_type, body.start_date, body.end_date),
    };
    Ok(Json(handler.sales_report(query).await?))
}
