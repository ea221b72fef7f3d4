//! Page handlers
//!
//! The three views of the site. Each request fetches fresh feed data and
//! the site defaults, overlays the visitor's preference cookies, then
//! renders the whole page.

use axum::extract::{Query, State};
use axum_extra::extract::cookie::CookieJar;
use maud::Markup;
use serde::Deserialize;

use crate::adapters::settings_from_jar;
use crate::render::{article_page, category_page, home_page, Links};
use crate::AppState;

/// Query for `article.html`
#[derive(Debug, Default, Deserialize)]
pub struct ArticleQuery {
    pub id: Option<String>,
}

/// Query for `category.html`
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub cat: Option<String>,
}

/// GET / and GET /index.html
///
/// The article grid and the box-office widgets load concurrently and fail
/// independently.
pub async fn home(State(state): State<AppState>, jar: CookieJar) -> Markup {
    let (list, widgets, defaults) = tokio::join!(
        state.feed_service.home(),
        state.box_office_service.widgets(),
        state.settings_service.current(),
    );
    let settings = settings_from_jar(&jar, defaults);
    home_page(&settings, Links::Query, &list, &widgets)
}

/// GET /article.html?id=N
pub async fn article(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<ArticleQuery>,
) -> Markup {
    let (detail, defaults) = tokio::join!(
        state.feed_service.detail(query.id.as_deref()),
        state.settings_service.current(),
    );
    let settings = settings_from_jar(&jar, defaults);
    article_page(&settings, Links::Query, &detail)
}

/// GET /category.html?cat=theater|film
pub async fn category(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<CategoryQuery>,
) -> Markup {
    let (list, defaults) = tokio::join!(
        state.feed_service.category(query.cat.as_deref()),
        state.settings_service.current(),
    );
    let settings = settings_from_jar(&jar, defaults);
    category_page(&settings, Links::Query, &list)
}
