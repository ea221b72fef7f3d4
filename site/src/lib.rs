//! Collective Monologue site
//!
//! Server-side renderer for a Korean-language performing-arts news site:
//! a home grid of every article with the weekly box-office widgets, a
//! single-article page and per-category listings.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod handlers;
pub mod render;

#[cfg(test)]
mod test_utils;


use app::{BoxOfficeService, FeedService, SettingsService};
use domain::ports::{FeedSource, SettingsStore};
use render::DateFormatter;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService<dyn FeedSource>>,
    pub box_office_service: Arc<BoxOfficeService<dyn FeedSource>>,
    /// Site-wide defaults; each visitor's cookies are overlaid per request
    pub settings_service: Arc<SettingsService<dyn SettingsStore>>,
}

impl AppState {
    pub fn new(
        feed: Arc<dyn FeedSource>,
        settings: Arc<dyn SettingsStore>,
        dates: DateFormatter,
    ) -> Self {
        Self {
            feed_service: Arc::new(FeedService::new(feed.clone(), dates)),
            box_office_service: Arc::new(BoxOfficeService::new(feed)),
            settings_service: Arc::new(SettingsService::new(settings)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router for every page and endpoint
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::home))
        .route("/index.html", get(handlers::home))
        .route("/article.html", get(handlers::article))
        .route("/category.html", get(handlers::category))
        // JSON endpoints
        .route(
            "/preferences",
            get(handlers::get_preferences).put(handlers::put_preferences),
        )
        .route("/audit", get(handlers::get_audit))
        .route("/health", get(health))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
