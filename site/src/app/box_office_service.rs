//! Box-office service
//!
//! Builds the two home-page widgets from the box-office document. The
//! widgets fail independently of the article grid.

use std::sync::Arc;

use crate::app::page::{messages, Region};
use crate::domain::entities::{BoxOfficeEntry, Recommendation};
use crate::domain::ports::FeedSource;

/// Contents of the Broadway ranking and recommendation widgets
#[derive(Debug, Clone, PartialEq)]
pub struct BoxOfficeWidgets {
    pub ranking: Region<Vec<BoxOfficeEntry>>,
    pub picks: Region<Vec<Recommendation>>,
}

impl BoxOfficeWidgets {
    fn unavailable() -> Self {
        Self {
            ranking: Region::Message(messages::BOX_OFFICE_UNAVAILABLE),
            picks: Region::Message(messages::BOX_OFFICE_UNAVAILABLE),
        }
    }
}

/// Service for the weekly box-office widgets
pub struct BoxOfficeService<S>
where
    S: FeedSource + ?Sized,
{
    source: Arc<S>,
}

impl<S> BoxOfficeService<S>
where
    S: FeedSource + ?Sized,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub async fn widgets(&self) -> BoxOfficeWidgets {
        let report = match self.source.fetch_box_office().await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("Box office load error: {}", e);
                return BoxOfficeWidgets::unavailable();
            }
        };

        let ranking = match report.ranking() {
            Some(entries) => Region::Filled(entries.to_vec()),
            None => Region::Message(messages::RANKING_EMPTY),
        };
        let picks = match report.picks() {
            Some(items) => Region::Filled(items.to_vec()),
            None => Region::Message(messages::PICKS_EMPTY),
        };

        BoxOfficeWidgets { ranking, picks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BoxOfficeReport;
    use crate::test_utils::{test_box_office, FailingFeedSource, InMemoryFeedSource};

    #[tokio::test]
    async fn renders_both_lists() {
        let service =
            BoxOfficeService::new(Arc::new(InMemoryFeedSource::new().with_box_office(test_box_office())));

        let widgets = service.widgets().await;

        let ranking = widgets.ranking.filled().unwrap();
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].show, "Hamilton");
        let picks = widgets.picks.filled().unwrap();
        assert_eq!(picks[0].title, "Oh, Mary!");
    }

    #[tokio::test]
    async fn empty_lists_show_no_data_messages() {
        let report = BoxOfficeReport {
            broadway: Some(vec![]),
            recommendations: None,
        };
        let service =
            BoxOfficeService::new(Arc::new(InMemoryFeedSource::new().with_box_office(report)));

        let widgets = service.widgets().await;

        assert_eq!(widgets.ranking, Region::Message(messages::RANKING_EMPTY));
        assert_eq!(widgets.picks, Region::Message(messages::PICKS_EMPTY));
    }

    #[tokio::test]
    async fn one_list_missing_does_not_hide_the_other() {
        let mut report = test_box_office();
        report.recommendations = None;
        let service =
            BoxOfficeService::new(Arc::new(InMemoryFeedSource::new().with_box_office(report)));

        let widgets = service.widgets().await;

        assert!(widgets.ranking.filled().is_some());
        assert_eq!(widgets.picks, Region::Message(messages::PICKS_EMPTY));
    }

    #[tokio::test]
    async fn fetch_failure_marks_both_widgets() {
        let service = BoxOfficeService::new(Arc::new(FailingFeedSource::status(404)));

        let widgets = service.widgets().await;

        assert_eq!(
            widgets.ranking,
            Region::Message(messages::BOX_OFFICE_UNAVAILABLE)
        );
        assert_eq!(
            widgets.picks,
            Region::Message(messages::BOX_OFFICE_UNAVAILABLE)
        );
    }
}
