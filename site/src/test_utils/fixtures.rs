//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid record that can be customized.

use crate::domain::entities::{Article, BoxOfficeEntry, BoxOfficeReport, Recommendation};

/// A fully translated theater article
pub fn test_article() -> Article {
    Article {
        id: None,
        title: "Wicked Announces New Season".to_string(),
        title_kr: Some("뮤지컬 위키드 새 시즌".to_string()),
        summary_kr: Some("위키드가 새 시즌을 발표했다.".to_string()),
        content_kr: Some("첫 문단\n\n둘째 문단".to_string()),
        date: Some("2024-03-01T10:05:00".to_string()),
        image: Some("https://playbill.com/wicked.jpg".to_string()),
        source: "Playbill".to_string(),
        link: Some("https://playbill.com/wicked".to_string()),
    }
}

/// An untranslated theater article with a specific title and link
pub fn theater_article(title: &str, link: &str) -> Article {
    Article {
        title: title.to_string(),
        source: "Playbill".to_string(),
        link: Some(link.to_string()),
        ..Default::default()
    }
}

/// An untranslated film article with a specific title and link
pub fn film_article(title: &str, link: &str) -> Article {
    Article {
        title: title.to_string(),
        source: "Variety".to_string(),
        link: Some(link.to_string()),
        ..Default::default()
    }
}

/// A box-office document with two ranked shows and one pick
pub fn test_box_office() -> BoxOfficeReport {
    BoxOfficeReport {
        broadway: Some(vec![
            BoxOfficeEntry {
                rank: Some("1".to_string()),
                show: "Hamilton".to_string(),
                theater: Some("Richard Rodgers Theatre".to_string()),
                description_kr: Some("힙합 뮤지컬".to_string()),
                gross_formatted: Some("$2,345,678".to_string()),
                avg_ticket: Some("$199".to_string()),
                attendance: Some("10,744".to_string()),
                capacity: Some("101.9%".to_string()),
            },
            BoxOfficeEntry {
                rank: Some("2".to_string()),
                show: "Wicked".to_string(),
                theater: None,
                description_kr: None,
                gross_formatted: Some("$2,100,000".to_string()),
                avg_ticket: None,
                attendance: None,
                capacity: Some("98.0%".to_string()),
            },
        ]),
        recommendations: Some(vec![Recommendation {
            title: "Oh, Mary!".to_string(),
            reason: "올해 가장 화제가 된 코미디".to_string(),
        }]),
    }
}
