//! Static export
//!
//! Writes every page of the site into a directory so it can be published
//! without a running server. Pages link to each other by file name.

use std::path::Path;

use maud::Markup;

use crate::app::{audit_of, PageTemplate, SummaryStatus};
use crate::domain::entities::Category;
use crate::error::ExportError;
use crate::render::{article_page, category_page, home_page, Links};
use crate::AppState;

/// What one export run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub articles: usize,
    pub translation_failures: usize,
    pub missing_summaries: usize,
}

async fn write_page(out_dir: &Path, name: &str, page: Markup) -> Result<(), ExportError> {
    let path = out_dir.join(name);
    tokio::fs::write(&path, page.into_string())
        .await
        .map_err(|source| ExportError::Write {
            path: path.display().to_string(),
            source,
        })?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Render the home page, both category pages and one page per article.
///
/// Both feed documents are fetched once and every page is rendered from
/// that snapshot. An unreadable article feed aborts the export; a missing
/// box-office document only leaves its widgets showing their fallback
/// message.
pub async fn export_site(state: &AppState, out_dir: &Path) -> Result<ExportSummary, ExportError> {
    let links = Links::Static;
    let feed = &state.feed_service;
    let (articles, widgets) = tokio::join!(feed.articles(), state.box_office_service.widgets());
    let articles = articles?;
    let audit = audit_of(&articles);

    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|source| ExportError::Write {
            path: out_dir.display().to_string(),
            source,
        })?;

    let settings = state.settings_service.current().await;
    let mut summary = ExportSummary {
        articles: audit.len(),
        ..Default::default()
    };

    let list = feed.list_of(PageTemplate::home(), &articles);
    write_page(out_dir, links.home(), home_page(&settings, links, &list, &widgets)).await?;
    summary.pages += 1;

    for category in [Category::Theater, Category::Film] {
        let list = feed.list_of(PageTemplate::category(category), &articles);
        write_page(
            out_dir,
            &links.category(category),
            category_page(&settings, links, &list),
        )
        .await?;
        summary.pages += 1;
    }

    for entry in &audit {
        let detail = feed.detail_at(&articles, entry.index);
        write_page(
            out_dir,
            &links.article(entry.index),
            article_page(&settings, links, &detail),
        )
        .await?;
        summary.pages += 1;

        match entry.summary {
            SummaryStatus::Translated => {}
            SummaryStatus::TranslationFailed => {
                summary.translation_failures += 1;
                tracing::warn!(
                    "Article {} ({}) has a failed translation",
                    entry.index,
                    entry.source
                );
            }
            SummaryStatus::Missing => summary.missing_summaries += 1,
        }
    }

    tracing::info!(
        "Exported {} pages for {} articles to {} ({} failed translations, {} without summary)",
        summary.pages,
        summary.articles,
        out_dir.display(),
        summary.translation_failures,
        summary.missing_summaries
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::entities::Article;
    use crate::render::DateFormatter;
    use crate::test_utils::{
        film_article, test_article, test_box_office, theater_article, CountingFeedSource,
        FailingFeedSource, InMemoryFeedSource, InMemorySettingsStore,
    };

    fn state(source: InMemoryFeedSource) -> AppState {
        AppState::new(
            Arc::new(source),
            Arc::new(InMemorySettingsStore::new()),
            DateFormatter::default(),
        )
    }

    #[tokio::test]
    async fn writes_every_page() {
        let failed = Article {
            summary_kr: Some("[번역 실패] timeout".to_string()),
            ..film_article("Dune", "https://variety.com/dune")
        };
        let source = InMemoryFeedSource::new()
            .with_articles(vec![
                test_article(),
                failed,
                theater_article("Hadestown", "https://playbill.com/hadestown"),
            ])
            .with_box_office(test_box_office());
        let dir = tempfile::tempdir().unwrap();

        let summary = export_site(&state(source), dir.path()).await.unwrap();

        assert_eq!(
            summary,
            ExportSummary {
                pages: 6,
                articles: 3,
                translation_failures: 1,
                missing_summaries: 1,
            }
        );
        for name in [
            "index.html",
            "category-theater.html",
            "category-film.html",
            "article-0.html",
            "article-1.html",
            "article-2.html",
        ] {
            assert!(dir.path().join(name).exists(), "missing {}", name);
        }

        let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains(r#"href="article-2.html""#));
        assert!(index.contains(r#"href="category-film.html""#));
        assert!(index.contains("Hamilton"));
        assert!(!index.contains("/preferences"));

        let theater = std::fs::read_to_string(dir.path().join("category-theater.html")).unwrap();
        assert!(theater.contains(r#"href="article-2.html""#));
        assert!(!theater.contains(r#"href="article-1.html""#));
    }

    #[tokio::test]
    async fn unreadable_feed_writes_nothing() {
        let state = AppState::new(
            Arc::new(FailingFeedSource::status(404)),
            Arc::new(InMemorySettingsStore::new()),
            DateFormatter::default(),
        );
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");

        let result = export_site(&state, &out).await;

        assert!(matches!(result, Err(ExportError::Feed(_))));
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn empty_feed_still_exports_the_shell_pages() {
        let dir = tempfile::tempdir().unwrap();

        let summary = export_site(&state(InMemoryFeedSource::new()), dir.path())
            .await
            .unwrap();

        assert_eq!(summary.pages, 3);
        let film = std::fs::read_to_string(dir.path().join("category-film.html")).unwrap();
        assert!(film.contains("아직 등록된 기사가 없습니다."));
    }

    #[tokio::test]
    async fn feed_is_fetched_once_per_export() {
        let source = Arc::new(CountingFeedSource::new(
            InMemoryFeedSource::new()
                .with_articles(vec![
                    test_article(),
                    film_article("Dune", "https://variety.com/dune"),
                    theater_article("Hadestown", "https://playbill.com/hadestown"),
                ])
                .with_box_office(test_box_office()),
        ));
        let state = AppState::new(
            source.clone(),
            Arc::new(InMemorySettingsStore::new()),
            DateFormatter::default(),
        );
        let dir = tempfile::tempdir().unwrap();

        let summary = export_site(&state, dir.path()).await.unwrap();

        assert_eq!(summary.pages, 6);
        assert_eq!(source.article_fetches(), 1);
        assert_eq!(source.box_office_fetches(), 1);
        let article = std::fs::read_to_string(dir.path().join("article-1.html")).unwrap();
        assert!(article.contains("Dune"));
    }
}
