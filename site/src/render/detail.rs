//! Single-article rendering

use maud::{html, Markup};

use crate::app::{ArticleDetail, Region};

const ORIGINAL_LINK_LABEL: &str = "원본 기사 보기";

/// The article body: header regions, featured image, paragraphs and the
/// attribution line. A message region renders the message alone.
pub fn render_detail(detail: &Region<ArticleDetail>) -> Markup {
    match detail {
        Region::Filled(article) => render_article(article),
        Region::Message(message) => html! {
            div.single-article-content {
                p.region-message { (message) }
            }
        },
    }
}

fn render_article(article: &ArticleDetail) -> Markup {
    html! {
        div.hero-category { "🎭 " (article.category.korean_label()) }
        h1.article-title { (article.title) }
        div.article-meta-bar {
            span.meta-source { (article.source) }
            span.divider {}
            span.meta-date { (article.date) }
            @if let Some(link) = &article.link {
                span.divider {}
                a.original-link href=(link) target="_blank" rel="noopener noreferrer" {
                    (ORIGINAL_LINK_LABEL)
                }
            }
        }
        @if let Some(image) = &article.image {
            div.article-featured-image {
                img src=(image) alt="Article Thumbnail";
            }
        }
        div.single-article-content {
            @for paragraph in &article.paragraphs {
                p { (paragraph) }
            }
            p.attribution {
                em {
                    "이 기사는 " b { (article.source) }
                    "에서 스크랩 되었으며 AI에 의해 한국어로 요약되었습니다."
                }
            }
        }
    }
}
