//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the renderers.

pub mod box_office_service;
pub mod feed_service;
pub mod page;
pub mod settings_service;

pub use box_office_service::{BoxOfficeService, BoxOfficeWidgets};
pub use feed_service::{
    audit_of, ArticleCard, ArticleDetail, ArticleList, AuditEntry, FeedService, SummaryStatus,
};
pub use page::{messages, CardStyle, PageTemplate, Region};
pub use settings_service::SettingsService;
