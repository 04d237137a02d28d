//! 聊天会话令牌交换接口

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use stand_errors::AppResult;

/// 托管聊天组件使用的临时会话
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub client_token: String,
}

/// 用项目密钥换取客户端令牌
#[async_trait]
pub trait ChatSessionIssuer: Send + Sync {
    /// `project_slug` 为空时使用配置中的项目
    async fn issue(&self, project_slug: Option<&str>) -> AppResult<ChatSession>;
}
