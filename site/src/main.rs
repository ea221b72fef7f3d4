//! Collective Monologue site server
//!
//! Serves the home, article and category pages rendered from the feed,
//! plus the preferences and audit endpoints.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use monologue_site::config::Config;
use monologue_site::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,monologue_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Collective Monologue site...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let feed = config
        .feed_source()
        .context("Failed to build feed client")?;
    let settings = config.settings_store();

    let state = AppState::new(feed, settings, config.date_formatter());
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
