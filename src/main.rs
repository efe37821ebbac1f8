use anyhow::Context;
use log::{info, warn};
use speedlens::{build_router, services::PageSpeedClient, AppState, Config};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenv::dotenv().ok();

    // initialize tracing; `log` records are bridged into it
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Using PageSpeed endpoint {}", config.api_url);

    let client = PageSpeedClient::new(&config).context("Failed to build HTTP client")?;
    if !client.has_default_key() {
        warn!("GOOGLE_API_KEY is not set; PageSpeed requests will fail until one is configured");
    }
    let addr = config.bind_addr();
    let shared_state = Arc::new(AppState::new(config, client));
    let app = build_router(shared_state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 Server running on http://{}", addr);
    axum::serve(listener, app).await.context("Server stopped")?;

    Ok(())
}
