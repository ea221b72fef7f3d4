//! Feed source port trait
//!
//! The site reads two static documents. Adapters fetch them over HTTP or
//! from a local data directory.

use async_trait::async_trait;

use crate::domain::entities::{Article, BoxOfficeReport};
use crate::error::FeedError;

/// Source of the article and box-office feeds
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the full article array, in published order
    async fn fetch_articles(&self) -> Result<Vec<Article>, FeedError>;

    /// Fetch the weekly box-office document
    async fn fetch_box_office(&self) -> Result<BoxOfficeReport, FeedError>;
}
