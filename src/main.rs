use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;

use docchat::infrastructure::observability::{TracingConfig, init_tracing};
use docchat::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(
        environment.as_str(),
        &settings.logging.level,
        settings.logging.enable_json,
    ))?;

    if settings.cloud.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; the cloud chat endpoint will reject requests");
    }

    tracing::info!(
        local_url = %settings.local.url,
        local_model = %settings.local.model,
        cloud_url = %settings.cloud.url,
        max_body_mb = settings.server.max_body_mb,
        "Backends configured"
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;

    let router = create_router(AppState::from_settings(settings));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
