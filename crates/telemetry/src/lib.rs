//! telemetry - 可观测性库

use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化 tracing
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// 初始化 JSON 格式的 tracing（生产环境）
pub fn init_tracing_json(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}

/// 初始化输出到 stderr 的 tracing
///
/// stdio 协议进程的 stdout 只能承载协议帧
pub fn init_tracing_stderr(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();
}

/// 初始化 Prometheus metrics
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// 记录实体创建
pub fn record_entity_created(entity: &'static str) {
    counter!("stand_entities_created_total", "entity" => entity).increment(1);
}

/// 记录被拒绝的重复创建
pub fn record_duplicate_rejected(entity: &'static str) {
    counter!("stand_duplicates_rejected_total", "entity" => entity).increment(1);
}

/// 记录报表生成
pub fn record_report_generated(report_type: &'static str) {
    counter!("stand_reports_generated_total", "type" => report_type).increment(1);
}

/// 记录工具调用
pub fn record_tool_call(tool: &str, success: bool) {
    let outcome = if success { "success" } else { "error" };
    counter!(
        "stand_tool_calls_total",
        "tool" => tool.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}
