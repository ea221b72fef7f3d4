//! Translation audit handler
//!
//! Lists every article with the state of its Korean translation.
//! Supports content negotiation: Accept: application/json for JSON, otherwise text/plain.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};

use crate::app::{AuditEntry, SummaryStatus};
use crate::error::AppError;
use crate::handlers::wants_json;
use crate::AppState;

/// One line per article: position, category, summary state, title
pub fn render_audit(entries: &[AuditEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let summary = match entry.summary {
            SummaryStatus::Translated => "ok",
            SummaryStatus::TranslationFailed => "failed",
            SummaryStatus::Missing => "missing",
        };
        let title_flag = if entry.has_korean_title { "kr" } else { "en" };
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            entry.index, entry.category, summary, title_flag, entry.title
        ));
    }
    out
}

/// GET /audit
pub async fn get_audit(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let entries = state.feed_service.audit().await?;

    if wants_json(&headers) {
        Ok(Json(entries).into_response())
    } else {
        Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_audit(&entries),
        )
            .into_response())
    }
}
