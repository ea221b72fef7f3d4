//! Filesystem adapters

pub mod feed;
pub mod settings;

pub use feed::FileFeedSource;
pub use settings::JsonFileSettingsStore;
