//! stdio 工具服务
//!
//! 每行一条 JSON-RPC 消息，通知不产生响应

use std::sync::Arc;

use serde_json::{json, Value};
use storefront::application::ServiceHandler;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::protocol::{
    codes, CallToolParams, RpcError, RpcRequest, RpcResponse, ToolCallResult, JSONRPC_VERSION,
    PROTOCOL_VERSION,
};
use crate::tools::{ToolError, ToolRegistry};

/// 对外公布的服务名
pub const SERVER_NAME: &str = "nanobanana-stand";

pub struct ToolServer {
    handler: Arc<ServiceHandler>,
    registry: ToolRegistry,
}

impl ToolServer {
    pub fn new(handler: Arc<ServiceHandler>, registry: ToolRegistry) -> Self {
        Self { handler, registry }
    }

    /// 处理一行输入，返回需要写回的响应
    pub async fn handle_message(&self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let response = match serde_json::from_str::<Value>(line) {
            Err(e) => Some(RpcResponse::failure(
                Value::Null,
                RpcError::new(codes::PARSE_ERROR, format!("Parse error: {e}")),
            )),
            Ok(value) => self.handle_value(value).await,
        };

        response.and_then(|r| match serde_json::to_string(&r) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(error = %e, "Failed to encode response");
                None
            }
        })
    }

    async fn handle_value(&self, value: Value) -> Option<RpcResponse> {
        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: RpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                return Some(RpcResponse::failure(
                    id,
                    RpcError::new(codes::INVALID_REQUEST, format!("Invalid request: {e}")),
                ));
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(RpcResponse::failure(
                id,
                RpcError::new(codes::INVALID_REQUEST, "jsonrpc must be \"2.0\""),
            ));
        }

        if request.is_notification() {
            debug!(method = %request.method, "Notification received");
            return None;
        }

        let result = self.dispatch(&request.method, request.params).await;
        Some(match result {
            Ok(result) => RpcResponse::success(id, result),
            Err(error) => RpcResponse::failure(id, error),
        })
    }

    async fn dispatch(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        match method {
            "initialize" => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION"),
                },
            })),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.registry.descriptors() })),
            "tools/call" => self.call_tool(params).await,
            other => Err(RpcError::new(
                codes::METHOD_NOT_FOUND,
                format!("Method not found: {other}"),
            )),
        }
    }

    async fn call_tool(&self, params: Value) -> Result<Value, RpcError> {
        let params: CallToolParams = serde_json::from_value(params)
            .map_err(|e| RpcError::new(codes::INVALID_PARAMS, e.to_string()))?;

        let result = match self
            .registry
            .call(&self.handler, &params.name, params.arguments)
            .await
        {
            Ok(body) => ToolCallResult::json(&body, false),
            Err(ToolError::Failed(body)) => ToolCallResult::json(&body, true),
            Err(e @ (ToolError::UnknownTool(_) | ToolError::InvalidParams(_))) => {
                return Err(RpcError::new(codes::INVALID_PARAMS, e.to_string()));
            }
            Err(e @ ToolError::Schema { .. }) => {
                return Err(RpcError::new(codes::INTERNAL_ERROR, e.to_string()));
            }
        };

        serde_json::to_value(result)
            .map_err(|e| RpcError::new(codes::INTERNAL_ERROR, e.to_string()))
    }

    /// 读取直到输入结束
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Tool server ready on stdio");
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if let Some(response) = self.handle_message(&line).await {
                writer.write_all(response.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }

        info!("Input closed, tool server stopping");
        Ok(())
    }
}
