mod config;

use std::sync::OnceLock;

use axum::{Router, response::IntoResponse, routing::get};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use types::{ClientConfig, Result, err};

pub use crate::config::Config;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Install the global tracing subscriber. Filter comes from `RUST_LOG`.
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server=debug,confirmation=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| err!("failed to install tracing subscriber: {}", e))?;
    Ok(())
}

/// Load configuration and build the routes served next to the app.
pub fn init() -> Result<Router> {
    let config = Config::load()?;
    tracing::info!(api_url = %config.api_url, "configuration loaded");

    if CONFIG.set(config).is_err() {
        tracing::warn!("configuration was already initialized, keeping the first one");
    }

    Ok(Router::new().route("/health", get(health)))
}

pub fn client_config() -> Result<ClientConfig> {
    let config = CONFIG
        .get()
        .ok_or_else(|| err!("server configuration has not been loaded"))?;

    Ok(ClientConfig {
        api_url: config.api_url.clone(),
    })
}

async fn health() -> impl IntoResponse {
    "OK"
}
