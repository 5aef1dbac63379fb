mod config;
mod routes;

use std::sync::Arc;

use anyhow::Context;
use inspira_palettes::{CoolorsClient, PaletteService};
use tracing::info;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let source = CoolorsClient::new(config.trending_url.clone(), config.trending_timeout)
        .context("build trending client")?;
    let service = Arc::new(PaletteService::new(source));
    let app = routes::router(service);

    info!(
        bind = %config.bind,
        trending_url = %config.trending_url,
        trending_timeout_secs = config.trending_timeout.as_secs(),
        "inspira-server starting"
    );

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("bind {}", config.bind))?;
    axum::serve(listener, app).await?;

    Ok(())
}
