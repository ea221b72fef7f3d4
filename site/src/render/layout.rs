//! Full pages
//!
//! Every page shares the same shell: the visitor's theme on `<html>`, the
//! site header with the theme toggle, and the cookie banner until the
//! visitor has decided. Served pages save choices through the server;
//! exported pages keep them in the browser.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::box_office::{render_picks, render_ranking};
use super::cards::render_article_list;
use super::detail::render_detail;
use super::links::Links;
use crate::app::{ArticleDetail, ArticleList, BoxOfficeWidgets, Region};
use crate::domain::entities::{Category, Settings, Theme};

pub const SITE_NAME: &str = "Collective Monologue";

/// Saves a preference change and reloads so the server renders it
const PREFERENCES_SCRIPT: &str = r#"
function savePreference(body) {
  fetch('/preferences', {
    method: 'PUT',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(body)
  }).then(function () { window.location.reload(); });
}
document.querySelectorAll('[data-theme-target]').forEach(function (el) {
  el.addEventListener('click', function () {
    savePreference({ theme: el.dataset.themeTarget });
  });
});
document.querySelectorAll('[data-consent]').forEach(function (el) {
  el.addEventListener('click', function () {
    savePreference({ cookie_consent: el.dataset.consent });
  });
});
"#;

/// Exported pages have no server to save to; the browser keeps the choice
const LOCAL_PREFERENCES_SCRIPT: &str = r#"
(function () {
  var root = document.documentElement;
  var toggle = document.getElementById('themeToggle');
  var banner = document.getElementById('cookie-banner');
  function applyTheme(theme) {
    root.dataset.theme = theme;
    toggle.dataset.themeTarget = theme === 'dark' ? 'light' : 'dark';
    toggle.textContent = theme === 'dark' ? '☀️' : '🌙';
  }
  var saved = localStorage.getItem('theme');
  if (saved === 'light' || saved === 'dark') { applyTheme(saved); }
  if (banner && localStorage.getItem('cookie_consent')) { banner.remove(); }
  toggle.addEventListener('click', function () {
    var theme = toggle.dataset.themeTarget;
    localStorage.setItem('theme', theme);
    applyTheme(theme);
  });
  document.querySelectorAll('[data-consent]').forEach(function (el) {
    el.addEventListener('click', function () {
      localStorage.setItem('cookie_consent', el.dataset.consent);
      if (banner) { banner.remove(); }
    });
  });
})();
"#;

fn preferences_script(links: Links) -> &'static str {
    match links {
        Links::Query => PREFERENCES_SCRIPT,
        Links::Static => LOCAL_PREFERENCES_SCRIPT,
    }
}

fn toggle_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "🌙",
        Theme::Dark => "☀️",
    }
}

fn shell(
    settings: &Settings,
    links: Links,
    title: &str,
    body_class: &str,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ko" data-theme=(settings.theme) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="css/style.css";
            }
            body class=(body_class) {
                header.site-header {
                    a.logo href=(links.home()) { (SITE_NAME) }
                    nav.site-nav {
                        @for category in [Category::Theater, Category::Film] {
                            a href=(links.category(category)) { (category.korean_label()) }
                        }
                    }
                    button #"themeToggle" type="button" data-theme-target=(settings.theme.toggled()) {
                        (toggle_icon(settings.theme))
                    }
                }
                main { (content) }
                @if settings.cookie_consent.is_none() {
                    div.cookie-banner #"cookie-banner" {
                        p { "이 사이트는 더 나은 경험을 위해 쿠키를 사용합니다." }
                        button type="button" data-consent="accepted" { "동의" }
                        button type="button" data-consent="rejected" { "거부" }
                    }
                }
                script { (PreEscaped(preferences_script(links))) }
            }
        }
    }
}

/// Home: the article grid beside the two box-office widgets
pub fn home_page(
    settings: &Settings,
    links: Links,
    list: &ArticleList,
    widgets: &BoxOfficeWidgets,
) -> Markup {
    let content = html! {
        section.latest-news {
            div.article-list id=(list.template.container_id) {
                (render_article_list(list, links))
            }
        }
        aside.sidebar {
            section.widget {
                h3.widget-title { "Broadway Box Office" }
                div #"broadway-widget-content" { (render_ranking(&widgets.ranking)) }
            }
            section.widget {
                h3.widget-title { "Off-Broadway Picks" }
                div #"recommendation-widget-content" { (render_picks(&widgets.picks)) }
            }
        }
    };
    shell(settings, links, SITE_NAME, "home", content)
}

/// Category listing page
pub fn category_page(settings: &Settings, links: Links, list: &ArticleList) -> Markup {
    let label = list
        .template
        .filter
        .map(|category| category.korean_label())
        .unwrap_or_default();
    let content = html! {
        section.category-hero {
            h1.category-title { (label) }
        }
        div.articles-grid id=(list.template.container_id) {
            (render_article_list(list, links))
        }
    };
    shell(
        settings,
        links,
        &format!("{} | {}", label, SITE_NAME),
        "category",
        content,
    )
}

/// Single-article page
pub fn article_page(
    settings: &Settings,
    links: Links,
    detail: &Region<ArticleDetail>,
) -> Markup {
    let title = match detail {
        Region::Filled(article) => format!("{} | {}", article.title, SITE_NAME),
        Region::Message(_) => SITE_NAME.to_string(),
    };
    let content = html! {
        article.single-article {
            (render_detail(detail))
        }
    };
    shell(settings, links, &title, "article", content)
}
