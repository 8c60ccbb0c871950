use anyhow::{anyhow, Context};
use tokio::net::TcpListener;

use ratego_backend::app;
use ratego_backend::config::AppConfig;
use ratego_backend::logging::{init_logging, LoggingConfig};
use ratego_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env()).map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let state = AppState::from_config(&config)?;

    // Initial fetch for the default base; the fallback table serves until it lands
    let ticket = state.dashboard.begin_rate_refresh();
    let dashboard = state.dashboard.clone();
    tokio::spawn(async move {
        dashboard.refresh_rates(ticket).await;
    });

    let app = app::create_app(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("RateGo backend running at http://{}/", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
