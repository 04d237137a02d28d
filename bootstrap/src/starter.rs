//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::runtime::shutdown_signal;

/// 运行 HTTP 服务
///
/// 为路由挂载请求追踪与 CORS 层，绑定地址后阻塞直到收到关闭信号
pub async fn serve_http(addr: &str, app: Router) -> std::io::Result<()> {
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "HTTP server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");
    Ok(())
}
