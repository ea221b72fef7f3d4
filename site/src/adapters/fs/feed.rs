//! Local data directory feed source
//!
//! Reads the same documents the HTTP origin publishes, straight from the
//! `data/` directory the crawler writes into.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::entities::{Article, BoxOfficeReport};
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

const ARTICLES_FILE: &str = "articles.json";
const BOX_OFFICE_FILE: &str = "boxoffice.json";

/// Feed source backed by files on disk
pub struct FileFeedSource {
    data_dir: PathBuf,
}

impl FileFeedSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, FeedError> {
        let path = self.data_dir.join(file);
        tracing::debug!("Reading {}", path.display());
        let bytes = tokio::fs::read(&path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl FeedSource for FileFeedSource {
    async fn fetch_articles(&self) -> Result<Vec<Article>, FeedError> {
        self.read_json(ARTICLES_FILE).await
    }

    async fn fetch_box_office(&self) -> Result<BoxOfficeReport, FeedError> {
        self.read_json(BOX_OFFICE_FILE).await
    }
}
