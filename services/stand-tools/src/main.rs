//! nanoBanana Stand 工具服务（stdio）

use std::sync::Arc;

use anyhow::Context;
use chrono::Local;
use stand_config::AppConfig;
use stand_telemetry::init_tracing_stderr;
use stand_tools::{ToolRegistry, ToolServer};
use tokio::io::{stdin, stdout, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load("config").context("loading configuration")?;
    // stdout 专用于协议消息，日志写 stderr
    init_tracing_stderr(&config.telemetry.log_level);

    let handler = storefront::build_handler(&config, Local::now().date_naive())
        .context("building service handler")?;
    let registry = ToolRegistry::new().context("compiling tool schemas")?;
    let tools: Vec<_> = registry.names().collect();
    tracing::info!(?tools, "Tools registered");

    let server = ToolServer::new(Arc::new(handler), registry);
    server
        .run(BufReader::new(stdin()), stdout())
        .await
        .context("serving stdio")?;
    Ok(())
}
