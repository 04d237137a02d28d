//! stand-config - 配置加载库

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "STAND_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// 强制输出 JSON 日志（生产环境默认开启）
    #[serde(default)]
    pub json: bool,
    /// 是否安装 Prometheus recorder 并暴露 /metrics
    #[serde(default = "default_true")]
    pub metrics: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
            metrics: true,
        }
    }
}

/// 模拟销售数据配置
#[derive(Debug, Clone, Deserialize)]
pub struct SalesConfig {
    /// 随机种子，不配置时每次启动使用系统熵
    pub seed: Option<u64>,
    /// 向前回溯的天数（含当天共 window_days + 1 天）
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    /// 周末销量系数
    #[serde(default = "default_weekend_boost")]
    pub weekend_boost: f64,
}

fn default_window_days() -> u32 {
    180
}

fn default_weekend_boost() -> f64 {
    1.4
}

impl Default for SalesConfig {
    fn default() -> Self {
        Self {
            seed: None,
            window_days: default_window_days(),
            weekend_boost: default_weekend_boost(),
        }
    }
}

/// 托管聊天会话配置
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// 会话令牌交换地址
    pub session_url: String,
    pub api_key: Secret<String>,
    #[serde(default = "default_project_slug")]
    pub project_slug: String,
    #[serde(default)]
    pub embed_origin: String,
    #[serde(default = "default_user_identifier")]
    pub user_identifier: String,
    #[serde(default = "default_expires_after_secs")]
    pub expires_after_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_project_slug() -> String {
    "nano-banana-stand".to_string()
}

fn default_user_identifier() -> String {
    "123".to_string()
}

fn default_expires_after_secs() -> u64 {
    3600
}

fn default_timeout_secs() -> u64 {
    10
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_app_env")]
    pub app_env: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub sales: SalesConfig,
    pub chat: Option<ChatConfig>,
}

fn default_app_name() -> String {
    "nanobanana-stand".to_string()
}

fn default_app_env() -> String {
    "development".to_string()
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 依次合并 `default.toml`、`{APP_ENV}.toml` 与 `STAND_` 前缀的环境变量，
    /// 嵌套字段使用双下划线分隔（如 `STAND_SERVER__PORT`）
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| default_app_env());
        Self::figment(config_dir, &env).extract().map_err(Into::into)
    }

    fn figment(config_dir: &str, env: &str) -> Figment {
        Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// 服务监听地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            app_env: default_app_env(),
            server: ServerConfig::default(),
            telemetry: TelemetryConfig::default(),
            sales: SalesConfig::default(),
            chat: None,
        }
    }
}

#[cfg(test)]
mod tests;
