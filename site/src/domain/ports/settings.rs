//! Settings store port trait

use async_trait::async_trait;

use crate::domain::entities::Settings;
use crate::error::SettingsError;

/// Persistence for visitor preferences. Last write wins.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load the saved settings, or defaults if nothing was saved yet
    async fn load(&self) -> Result<Settings, SettingsError>;

    /// Replace the saved settings
    async fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}
