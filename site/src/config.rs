use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::{FileFeedSource, HttpFeedSource, JsonFileSettingsStore};
use crate::domain::ports::{FeedSource, SettingsStore};
use crate::error::FeedError;
use crate::render::{display_offset, DateFormatter, DateStyle, DEFAULT_UTC_OFFSET_HOURS};

/// Where the feed documents are read from
#[derive(Debug, Clone, PartialEq)]
pub enum FeedLocation {
    /// Published site; documents under `<base>/data/`
    Http(String),
    /// Local directory holding `articles.json` and `boxoffice.json`
    Dir(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub feed: FeedLocation,
    pub settings_path: PathBuf,
    pub date_style: DateStyle,
    /// Offset from UTC that zoned feed dates are shown in
    pub display_offset_hours: i32,
    pub feed_timeout: Duration,
    pub port: u16,
    /// Output directory of the static exporter
    pub export_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take defaults, unparseable ones
    /// take defaults with a warning
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let feed = match lookup("FEED_BASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => FeedLocation::Http(url),
            None => FeedLocation::Dir(
                lookup("DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("data")),
            ),
        };

        Self {
            feed,
            settings_path: lookup("SETTINGS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/settings.json")),
            date_style: parse_or(&lookup, "DATE_STYLE", DateStyle::default()),
            display_offset_hours: parse_or(
                &lookup,
                "DISPLAY_UTC_OFFSET_HOURS",
                DEFAULT_UTC_OFFSET_HOURS,
            ),
            feed_timeout: Duration::from_secs(parse_or(&lookup, "FEED_TIMEOUT_SECS", 10)),
            port: parse_or(&lookup, "PORT", 8080),
            export_dir: lookup("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("dist")),
        }
    }

    pub fn date_formatter(&self) -> DateFormatter {
        DateFormatter::new(self.date_style, display_offset(self.display_offset_hours))
    }

    /// Feed adapter for the configured location
    pub fn feed_source(&self) -> Result<Arc<dyn FeedSource>, FeedError> {
        match &self.feed {
            FeedLocation::Http(base_url) => {
                tracing::info!("Reading feed from {}", base_url);
                Ok(Arc::new(HttpFeedSource::new(base_url, self.feed_timeout)?))
            }
            FeedLocation::Dir(dir) => {
                let source = FileFeedSource::new(dir.clone());
                tracing::info!("Reading feed from {}", source.data_dir().display());
                Ok(Arc::new(source))
            }
        }
    }

    pub fn settings_store(&self) -> Arc<dyn SettingsStore> {
        Arc::new(JsonFileSettingsStore::new(self.settings_path.clone()))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring invalid {}={:?}, using default", key, raw);
                default
            }
        },
    }
}
