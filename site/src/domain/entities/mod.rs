//! Domain entities
//!
//! Read-only view models for one render pass, plus visitor settings.

pub mod article;
pub mod box_office;
pub mod settings;

pub use article::{original_index, parse_position, Article, Category};
pub use box_office::{BoxOfficeEntry, BoxOfficeReport, Recommendation};
pub use settings::{CookieConsent, Settings, SettingsUpdate, Theme};
