//! 主应用程序入口
//!
//! 启动 OpenChat Web API 服务。

use std::sync::Arc;

use application::{RestReceptionist, SystemClock};
use config::AppConfig;
use domain::OpenChatSystem;
use tracing_subscriber::EnvFilter;
use web_api::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    // RUST_LOG 优先于配置中的过滤器
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let system = OpenChatSystem::new(Arc::new(SystemClock));
    let state = AppState::new(RestReceptionist::new(system));

    let app = router(state);
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!(%address, "OpenChat 服务器启动");
    axum::serve(listener, app).await?;

    Ok(())
}
