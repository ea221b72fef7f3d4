//! Feed service
//!
//! Turns the article feed into the view models for the home grid, the
//! category listing and the single-article page. Every failure is logged
//! and collapsed into the fixed message for the affected region.

use std::sync::Arc;

use serde::Serialize;

use crate::app::page::{messages, truncate, CardStyle, PageTemplate, Region, SNIPPET_CHARS};
use crate::domain::entities::{original_index, parse_position, Article, Category};
use crate::domain::ports::FeedSource;
use crate::error::FeedError;
use crate::render::DateFormatter;

/// One card in an article list
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleCard {
    /// Position in the unfiltered feed; the detail link target
    pub index: usize,
    pub title: String,
    /// Grid: full summary. Listing: truncated snippet.
    pub summary: String,
    pub category: Category,
    /// Grid: full date. Listing: date only.
    pub date: String,
    pub image: Option<String>,
}

/// A rendered article list for one page template
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleList {
    pub template: PageTemplate,
    pub cards: Region<Vec<ArticleCard>>,
}

/// Everything the single-article page shows
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDetail {
    pub index: usize,
    pub title: String,
    pub category: Category,
    pub source: String,
    pub date: String,
    pub link: Option<String>,
    pub image: Option<String>,
    pub paragraphs: Vec<String>,
}

/// One row of the translation audit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEntry {
    pub index: usize,
    pub title: String,
    pub source: String,
    pub category: Category,
    pub has_korean_title: bool,
    pub summary: SummaryStatus,
}

/// State of an article's Korean summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    Translated,
    TranslationFailed,
    Missing,
}

/// Service rendering article pages from a feed source
pub struct FeedService<S>
where
    S: FeedSource + ?Sized,
{
    source: Arc<S>,
    dates: DateFormatter,
}

impl<S> FeedService<S>
where
    S: FeedSource + ?Sized,
{
    pub fn new(source: Arc<S>, dates: DateFormatter) -> Self {
        Self { source, dates }
    }

    /// Fetch the article feed once, for callers rendering several pages
    pub async fn articles(&self) -> Result<Vec<Article>, FeedError> {
        self.source.fetch_articles().await
    }

    /// Render the article list for a page template
    pub async fn list(&self, template: PageTemplate) -> ArticleList {
        match self.source.fetch_articles().await {
            Ok(articles) => self.list_of(template, &articles),
            Err(e) => {
                tracing::error!("Failed to load articles for #{}: {}", template.container_id, e);
                ArticleList {
                    cards: Region::Message(template.error_message),
                    template,
                }
            }
        }
    }

    /// Render the article list for a page template from fetched articles
    pub fn list_of(&self, template: PageTemplate, articles: &[Article]) -> ArticleList {
        let cards = self.build_cards(&template, articles);
        ArticleList { template, cards }
    }

    /// Home grid: every article, in feed order
    pub async fn home(&self) -> ArticleList {
        self.list(PageTemplate::home()).await
    }

    /// Category listing for the `cat` query value
    pub async fn category(&self, cat: Option<&str>) -> ArticleList {
        self.list(PageTemplate::category(Category::from_query(cat)))
            .await
    }

    /// Single-article page for the `id` query value
    pub async fn detail(&self, id: Option<&str>) -> Region<ArticleDetail> {
        let Some(id) = id else {
            return Region::Message(messages::ARTICLE_MISSING_ID);
        };

        let articles = match self.source.fetch_articles().await {
            Ok(articles) => articles,
            Err(e) => {
                tracing::error!("Failed to load article {}: {}", id, e);
                return Region::Message(messages::ARTICLE_UNAVAILABLE);
            }
        };

        match parse_position(id) {
            Some(index) => self.detail_at(&articles, index),
            None => {
                tracing::debug!("Malformed article id {}", id);
                Region::Message(messages::ARTICLE_NOT_FOUND)
            }
        }
    }

    /// Single-article page for a feed position within fetched articles
    pub fn detail_at(&self, articles: &[Article], index: usize) -> Region<ArticleDetail> {
        match articles.get(index) {
            Some(article) => Region::Filled(self.build_detail(index, article)),
            None => {
                tracing::debug!("Article {} not in feed of {}", index, articles.len());
                Region::Message(messages::ARTICLE_NOT_FOUND)
            }
        }
    }

    /// Translation status of every article
    pub async fn audit(&self) -> Result<Vec<AuditEntry>, FeedError> {
        let articles = self.source.fetch_articles().await?;
        Ok(audit_of(&articles))
    }

    fn build_cards(&self, template: &PageTemplate, articles: &[Article]) -> Region<Vec<ArticleCard>> {
        let cards: Vec<ArticleCard> = articles
            .iter()
            .enumerate()
            .filter(|(_, article)| template.accepts(article))
            .map(|(position, article)| {
                let index = match template.filter {
                    None => position,
                    Some(_) => original_index(articles, article).unwrap_or(position),
                };
                self.article_to_card(template.card_style, index, article)
            })
            .collect();

        match (cards.is_empty(), template.empty_message) {
            (true, Some(message)) => Region::Message(message),
            _ => Region::Filled(cards),
        }
    }

    fn article_to_card(&self, style: CardStyle, index: usize, article: &Article) -> ArticleCard {
        let (summary, date) = match style {
            CardStyle::Grid => (
                article.display_summary().to_string(),
                self.dates.format(article.raw_date()),
            ),
            CardStyle::Listing => (
                article
                    .valid_summary()
                    .map(|s| truncate(s, SNIPPET_CHARS))
                    .unwrap_or_else(|| messages::SNIPPET_FALLBACK.to_string()),
                self.dates.format_short(article.raw_date()),
            ),
        };

        ArticleCard {
            index,
            title: article.display_title().to_string(),
            summary,
            category: article.category(),
            date,
            image: article.image_url().map(str::to_string),
        }
    }

    fn build_detail(&self, index: usize, article: &Article) -> ArticleDetail {
        let paragraphs = article
            .body_text()
            .unwrap_or(messages::BODY_MISSING)
            .split("\n\n")
            .map(str::to_string)
            .collect();

        ArticleDetail {
            index,
            title: article.display_title().to_string(),
            category: article.category(),
            source: article.source.clone(),
            date: self.dates.format(article.raw_date()),
            link: article.link.clone(),
            image: article.image_url().map(str::to_string),
            paragraphs,
        }
    }
}

/// Translation status of fetched articles
pub fn audit_of(articles: &[Article]) -> Vec<AuditEntry> {
    articles
        .iter()
        .enumerate()
        .map(|(index, article)| AuditEntry {
            index,
            title: article.display_title().to_string(),
            source: article.source.clone(),
            category: article.category(),
            has_korean_title: article.title_kr.as_deref().is_some_and(|t| !t.is_empty()),
            summary: summary_status(article),
        })
        .collect()
}

fn summary_status(article: &Article) -> SummaryStatus {
    match article.summary_kr.as_deref().filter(|s| !s.is_empty()) {
        None => SummaryStatus::Missing,
        Some(_) if article.valid_summary().is_some() => SummaryStatus::Translated,
        Some(_) => SummaryStatus::TranslationFailed,
    }
}
