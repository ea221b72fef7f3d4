//! Preference handlers
//!
//! Preferences belong to the visitor: they are read from and written to
//! the request's cookies, on top of the site defaults.

use std::sync::Arc;

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::adapters::{settings_from_jar, CookieSettingsStore};
use crate::app::SettingsService;
use crate::domain::entities::{Settings, SettingsUpdate};
use crate::error::AppError;
use crate::AppState;

/// GET /preferences
pub async fn get_preferences(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<Settings>, AppError> {
    let defaults = state.settings_service.load().await?;
    Ok(Json(settings_from_jar(&jar, defaults)))
}

/// PUT /preferences
///
/// Partial update: fields left out of the body keep their current value.
/// The result is sent back as cookies.
pub async fn put_preferences(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(update): Json<SettingsUpdate>,
) -> Result<(CookieJar, Json<Settings>), AppError> {
    let defaults = state.settings_service.current().await;
    let store = Arc::new(CookieSettingsStore::new(jar, defaults));
    let settings = SettingsService::new(store.clone()).update(&update).await?;
    Ok((store.jar().await, Json(settings)))
}
