//! HTTP feed source
//!
//! Fetches `data/articles.json` and `data/boxoffice.json` from the site's
//! static origin. Each request carries a `t=<millis>` query so intermediate
//! caches never serve a stale feed.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::entities::{Article, BoxOfficeReport};
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

pub const ARTICLES_PATH: &str = "data/articles.json";
pub const BOX_OFFICE_PATH: &str = "data/boxoffice.json";

/// Feed source backed by a static HTTP origin
pub struct HttpFeedSource {
    http: Client,
    base_url: String,
}

impl HttpFeedSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FeedError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn document_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FeedError> {
        let url = self.document_url(path);
        let cache_buster = Utc::now().timestamp_millis().to_string();

        tracing::debug!("Fetching {}", url);
        let response = self
            .http
            .get(&url)
            .query(&[("t", cache_buster.as_str())])
            .send()
            .await?;

        self.handle_response(response, url).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        url: String,
    ) -> Result<T, FeedError> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            Err(FeedError::Status {
                status: status.as_u16(),
                url,
            })
        }
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_articles(&self) -> Result<Vec<Article>, FeedError> {
        self.get_json(ARTICLES_PATH).await
    }

    async fn fetch_box_office(&self) -> Result<BoxOfficeReport, FeedError> {
        self.get_json(BOX_OFFICE_PATH).await
    }
}
