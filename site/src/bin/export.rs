//! Static site exporter
//!
//! Renders every page from the configured feed into `EXPORT_DIR` so the
//! site can be published as plain files.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use monologue_site::config::Config;
use monologue_site::export::export_site;
use monologue_site::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,monologue_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let feed = config
        .feed_source()
        .context("Failed to build feed client")?;
    let state = AppState::new(feed, config.settings_store(), config.date_formatter());

    let summary = export_site(&state, &config.export_dir)
        .await
        .with_context(|| format!("Export to {} failed", config.export_dir.display()))?;

    if summary.translation_failures > 0 {
        tracing::warn!(
            "{} of {} articles were published with a failed translation",
            summary.translation_failures,
            summary.articles
        );
    }

    Ok(())
}
