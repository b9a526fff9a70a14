//! Party Loot Discord Bot
//!
//! Relays slash commands to the Party Loot API, which tracks party funds,
//! inventory and campaigns for tabletop RPG groups.

mod client;
mod commands;
mod config;
mod discord;
mod errors;
mod models;
mod render;
mod session;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use client::ApiClient;
use config::Config;
use session::SessionStore;

/// Application state shared across all command handlers.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub api: Arc<ApiClient>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Party Loot Discord Bot");
    tracing::info!("API base URL: {}", config.api_base_url);

    let state = AppState {
        sessions: Arc::new(SessionStore::new()),
        api: Arc::new(ApiClient::new(config.api_base_url.clone())),
    };

    // Health endpoint for process supervisors
    if let Some(addr) = config.health_bind_addr {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Health endpoint listening on {}", addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, create_router()).await {
                tracing::error!("Health endpoint stopped: {}", e);
            }
        });
    }

    discord::run(&config.discord_token, state).await?;

    Ok(())
}

/// Create the router for the health endpoint.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
