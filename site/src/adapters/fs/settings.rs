//! JSON file settings store

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Settings;
use crate::domain::ports::SettingsStore;
use crate::error::SettingsError;

/// Settings kept in a single JSON file
pub struct JsonFileSettingsStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }
}

#[async_trait]
impl SettingsStore for JsonFileSettingsStore {
    async fn load(&self) -> Result<Settings, SettingsError> {
        let _guard = self.lock.read().await;
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let _guard = self.lock.write().await;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(settings)?;
        tokio::fs::write(&self.path, json).await?;
        tracing::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
