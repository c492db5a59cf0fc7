mod api_doc;
mod config;
mod handlers;
mod models;
mod routes;
mod state;

use anyhow::Context;
use config::Config;
use state::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("mock-endpoints starting");

    let config = Config::from_env()?;
    config.log_startup();

    let bind_addr = format!("{}:{}", config.service_host, config.service_port);
    let port = config.service_port;

    let app = routes::create_router(AppState {
        config: Arc::new(config),
    });

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Mock server running at http://localhost:{}", port);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
