//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod cookie;
pub mod fs;
pub mod http;

pub use cookie::{settings_from_jar, CookieSettingsStore};
pub use fs::{FileFeedSource, JsonFileSettingsStore};
pub use http::HttpFeedSource;
