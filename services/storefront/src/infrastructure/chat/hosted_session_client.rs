//! 托管聊天会话交换客户端
//!
//! 以 Bearer 方式携带项目密钥，向托管服务换取临时客户端令牌

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use stand_config::ChatConfig;
use stand_errors::{AppError, AppResult};
use tracing::{debug, info};

use crate::application::chat::{ChatSession, ChatSessionIssuer};

/// 项目选择请求头
pub const PROJECT_HEADER: &str = "Gram-Project";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionRequest<'a> {
    embed_origin: &'a str,
    user_identifier: &'a str,
    expires_after: u64,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    #[serde(alias = "clientToken")]
    client_token: String,
}

pub struct HostedSessionClient {
    client: reqwest::Client,
    session_url: String,
    api_key: Secret<String>,
    project_slug: String,
    embed_origin: String,
    user_identifier: String,
    expires_after_secs: u64,
}

impl HostedSessionClient {
    pub fn from_config(config: &ChatConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nanobanana-stand/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Chat HTTP client: {e}")))?;

        Ok(Self {
            client,
            session_url: config.session_url.clone(),
            api_key: config.api_key.clone(),
            project_slug: config.project_slug.clone(),
            embed_origin: config.embed_origin.clone(),
            user_identifier: config.user_identifier.clone(),
            expires_after_secs: config.expires_after_secs,
        })
    }
}

#[async_trait]
impl ChatSessionIssuer for HostedSessionClient {
    async fn issue(&self, project_slug: Option<&str>) -> AppResult<ChatSession> {
        let project = project_slug
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(self.project_slug.as_str());
        debug!(project, url = %self.session_url, "Requesting chat session");

        let body = SessionRequest {
            embed_origin: &self.embed_origin,
            user_identifier: &self.user_identifier,
            expires_after: self.expires_after_secs,
        };

        let response = self
            .client
            .post(&self.session_url)
            .bearer_auth(self.api_key.expose_secret())
            .header(PROJECT_HEADER, project)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Chat session request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Chat session exchange returned {status}"
            )));
        }

        let session: SessionResponse = response.json().await.map_err(|e| {
            AppError::external_service(format!("Invalid chat session response: {e}"))
        })?;

        info!(project, "Chat session issued");
        Ok(ChatSession {
            client_token: session.client_token,
        })
    }
}
