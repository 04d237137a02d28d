//! 聊天会话令牌接口

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use stand_errors::AppResult;

use crate::application::{ChatSession, ServiceHandler};
use crate::infrastructure::chat::PROJECT_HEADER;

/// `Gram-Project` 请求头可覆盖配置的项目
pub(super) async fn create_session(
    State(handler): State<Arc<ServiceHandler>>,
    headers: HeaderMap,
) -> AppResult<Json<ChatSession>> {
    let project = headers
        .get(PROJECT_HEADER)
        .and_then(|value| value.to_str().ok());
    Ok(Json(handler.issue_chat_session(project).await?))
}
