//! Settings service
//!
//! Explicit load/save contract over a settings store: the site defaults
//! file, or one visitor's cookies. Page rendering asks for the current
//! settings once per request and never touches the store directly.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::entities::{Settings, SettingsUpdate};
use crate::domain::ports::SettingsStore;
use crate::error::SettingsError;

pub struct SettingsService<ST>
where
    ST: SettingsStore + ?Sized,
{
    store: Arc<ST>,
    /// Held across load, apply and save so concurrent updates merge
    update_lock: Mutex<()>,
}

impl<ST> SettingsService<ST>
where
    ST: SettingsStore + ?Sized,
{
    pub fn new(store: Arc<ST>) -> Self {
        Self {
            store,
            update_lock: Mutex::new(()),
        }
    }

    pub async fn load(&self) -> Result<Settings, SettingsError> {
        self.store.load().await
    }

    /// Settings for rendering a page; a broken store means defaults
    pub async fn current(&self) -> Settings {
        match self.store.load().await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings, using defaults: {}", e);
                Settings::default()
            }
        }
    }

    /// Apply a partial update and save the result
    pub async fn update(&self, update: &SettingsUpdate) -> Result<Settings, SettingsError> {
        let _guard = self.update_lock.lock().await;
        let current = self.store.load().await?;
        let next = current
            .apply(update)
            .map_err(SettingsError::InvalidValue)?;
        self.store.save(&next).await?;
        tracing::info!(
            "Settings updated: theme={}, cookie_consent={:?}",
            next.theme,
            next.cookie_consent
        );
        Ok(next)
    }
}
