//! Box-office widget rendering

use maud::{html, Markup};

use crate::app::Region;
use crate::domain::entities::{BoxOfficeEntry, Recommendation};

const NOT_AVAILABLE: &str = "-";

pub fn render_ranking(ranking: &Region<Vec<BoxOfficeEntry>>) -> Markup {
    match ranking {
        Region::Filled(entries) => html! {
            @for entry in entries {
                (render_entry(entry))
            }
        },
        Region::Message(message) => html! { p.bway-stats { (message) } },
    }
}

pub fn render_picks(picks: &Region<Vec<Recommendation>>) -> Markup {
    match picks {
        Region::Filled(recommendations) => html! {
            @for rec in recommendations {
                div.rec-item {
                    h4 { (rec.title) }
                    p { (rec.reason) }
                }
            }
        },
        Region::Message(message) => html! { p.bway-stats { (message) } },
    }
}

fn stat(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

fn render_entry(entry: &BoxOfficeEntry) -> Markup {
    html! {
        div.bway-item {
            div.bway-rank-box {
                span.bway-rank-num { (stat(&entry.rank)) }
            }
            div.bway-info {
                div.bway-header-row {
                    h4 { (entry.show) }
                    @if let Some(theater) = entry.theater() {
                        span.bway-theater { "📍 " (theater) }
                    }
                }
                @if let Some(description) = entry.description() {
                    div.bway-desc { (description) }
                }
                div.bway-stats-compact {
                    span.bway-gross { "💰 " (stat(&entry.gross_formatted)) }
                    span { "🎫 " (stat(&entry.avg_ticket)) }
                    span { "👥 " (stat(&entry.attendance)) }
                    span { "📊 " (stat(&entry.capacity)) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages;
    use crate::test_utils::test_box_office;

    #[test]
    fn ranking_shows_every_stat() {
        let report = test_box_office();
        let html = render_ranking(&Region::Filled(report.broadway.unwrap())).into_string();

        assert_eq!(html.matches(r#"class="bway-item""#).count(), 2);
        assert!(html.contains(r#"<span class="bway-rank-num">1</span>"#));
        assert!(html.contains("<h4>Hamilton</h4>"));
        assert!(html.contains("📍 Richard Rodgers Theatre"));
        assert!(html.contains(r#"<div class="bway-desc">힙합 뮤지컬</div>"#));
        assert!(html.contains("💰 $2,345,678"));
        assert!(html.contains("🎫 $199"));
        assert!(html.contains("📊 101.9%"));
    }

    #[test]
    fn missing_optional_fields() {
        let report = test_box_office();
        let wicked = report.broadway.unwrap().remove(1);
        let html = render_ranking(&Region::Filled(vec![wicked])).into_string();

        assert!(!html.contains("📍"));
        assert!(!html.contains("bway-desc"));
        assert!(html.contains("🎫 -"));
        assert!(html.contains("👥 -"));
    }

    #[test]
    fn picks_and_messages() {
        let report = test_box_office();
        let html = render_picks(&Region::Filled(report.recommendations.unwrap())).into_string();
        assert_eq!(
            html,
            r#"<div class="rec-item"><h4>Oh, Mary!</h4><p>올해 가장 화제가 된 코미디</p></div>"#
        );

        let html = render_picks(&Region::Message(messages::PICKS_EMPTY)).into_string();
        assert_eq!(
            html,
            format!(r#"<p class="bway-stats">{}</p>"#, messages::PICKS_EMPTY)
        );
    }
}
