//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Article, BoxOfficeReport, Settings};
use crate::domain::ports::{FeedSource, SettingsStore};
use crate::error::{FeedError, SettingsError};

// ============================================================================
// In-Memory Feed Source
// ============================================================================

#[derive(Default)]
pub struct InMemoryFeedSource {
    articles: Arc<RwLock<Vec<Article>>>,
    box_office: Arc<RwLock<BoxOfficeReport>>,
}

impl InMemoryFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the article feed
    pub fn with_articles(self, articles: Vec<Article>) -> Self {
        *self.articles.write().unwrap() = articles;
        self
    }

    /// Pre-populate the box-office document
    pub fn with_box_office(self, report: BoxOfficeReport) -> Self {
        *self.box_office.write().unwrap() = report;
        self
    }
}

#[async_trait]
impl FeedSource for InMemoryFeedSource {
    async fn fetch_articles(&self) -> Result<Vec<Article>, FeedError> {
        Ok(self.articles.read().unwrap().clone())
    }

    async fn fetch_box_office(&self) -> Result<BoxOfficeReport, FeedError> {
        Ok(self.box_office.read().unwrap().clone())
    }
}

// ============================================================================
// Counting Feed Source
// ============================================================================

/// In-memory feed that records how often each document was fetched
pub struct CountingFeedSource {
    inner: InMemoryFeedSource,
    article_fetches: AtomicUsize,
    box_office_fetches: AtomicUsize,
}

impl CountingFeedSource {
    pub fn new(inner: InMemoryFeedSource) -> Self {
        Self {
            inner,
            article_fetches: AtomicUsize::new(0),
            box_office_fetches: AtomicUsize::new(0),
        }
    }

    pub fn article_fetches(&self) -> usize {
        self.article_fetches.load(Ordering::SeqCst)
    }

    pub fn box_office_fetches(&self) -> usize {
        self.box_office_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for CountingFeedSource {
    async fn fetch_articles(&self) -> Result<Vec<Article>, FeedError> {
        self.article_fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_articles().await
    }

    async fn fetch_box_office(&self) -> Result<BoxOfficeReport, FeedError> {
        self.box_office_fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_box_office().await
    }
}

// ============================================================================
// Failing Feed Source
// ============================================================================

/// Feed source whose documents fail in a configurable way
pub struct FailingFeedSource {
    status: Option<u16>,
}

impl FailingFeedSource {
    /// Every fetch answers with a non-success status
    pub fn status(status: u16) -> Self {
        Self {
            status: Some(status),
        }
    }

    /// Every fetch returns an undecodable body
    pub fn decode() -> Self {
        Self { status: None }
    }

    fn error(&self, path: &str) -> FeedError {
        match self.status {
            Some(status) => FeedError::Status {
                status,
                url: format!("http://feed.test/{}", path),
            },
            None => FeedError::Decode("expected value at line 1 column 1".to_string()),
        }
    }
}

#[async_trait]
impl FeedSource for FailingFeedSource {
    async fn fetch_articles(&self) -> Result<Vec<Article>, FeedError> {
        Err(self.error("data/articles.json"))
    }

    async fn fetch_box_office(&self) -> Result<BoxOfficeReport, FeedError> {
        Err(self.error("data/boxoffice.json"))
    }
}

// ============================================================================
// Split Feed Source
// ============================================================================

/// Articles load, the box-office document does not
pub struct ArticlesOnlyFeedSource {
    articles: Vec<Article>,
}

impl ArticlesOnlyFeedSource {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

#[async_trait]
impl FeedSource for ArticlesOnlyFeedSource {
    async fn fetch_articles(&self) -> Result<Vec<Article>, FeedError> {
        Ok(self.articles.clone())
    }

    async fn fetch_box_office(&self) -> Result<BoxOfficeReport, FeedError> {
        Err(FeedError::Status {
            status: 404,
            url: "http://feed.test/data/boxoffice.json".to_string(),
        })
    }
}

// ============================================================================
// Settings Stores
// ============================================================================

#[derive(Default)]
pub struct InMemorySettingsStore {
    settings: RwLock<Settings>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(self, settings: Settings) -> Self {
        *self.settings.write().unwrap() = settings;
        self
    }

    /// What is currently saved
    pub fn snapshot(&self) -> Settings {
        *self.settings.read().unwrap()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load(&self) -> Result<Settings, SettingsError> {
        Ok(self.snapshot())
    }

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        *self.settings.write().unwrap() = *settings;
        Ok(())
    }
}

/// In-memory store that yields between reading and returning, so
/// concurrent callers interleave their load and save
#[derive(Default)]
pub struct SlowLoadSettingsStore {
    inner: InMemorySettingsStore,
}

impl SlowLoadSettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Settings {
        self.inner.snapshot()
    }
}

#[async_trait]
impl SettingsStore for SlowLoadSettingsStore {
    async fn load(&self) -> Result<Settings, SettingsError> {
        let settings = self.inner.snapshot();
        tokio::task::yield_now().await;
        Ok(settings)
    }

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        self.inner.save(settings).await
    }
}

/// Store whose backing file is unreadable
pub struct BrokenSettingsStore;

#[async_trait]
impl SettingsStore for BrokenSettingsStore {
    async fn load(&self) -> Result<Settings, SettingsError> {
        Err(SettingsError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "settings.json",
        )))
    }

    async fn save(&self, _settings: &Settings) -> Result<(), SettingsError> {
        Err(SettingsError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "settings.json",
        )))
    }
}
