//! nanoBanana Stand HTTP 服务

use std::sync::Arc;

use anyhow::Context;
use chrono::Local;
use stand_bootstrap::{init_runtime, serve_http};
use stand_config::AppConfig;
use stand_telemetry::init_metrics;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load("config").context("loading configuration")?;
    init_runtime(&config);

    let metrics = if config.telemetry.metrics {
        match init_metrics() {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(error = %e, "Metrics recorder unavailable, /metrics disabled");
                None
            }
        }
    } else {
        None
    };

    info!("Initializing storefront...");
    let handler = storefront::build_handler(&config, Local::now().date_naive())
        .context("building service handler")?;
    let app = storefront::build_app(Arc::new(handler), metrics);

    serve_http(&config.bind_addr(), app)
        .await
        .context("serving HTTP")?;
    Ok(())
}
