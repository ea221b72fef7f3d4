//! Article list rendering
//!
//! One renderer for every list page; the template's card style picks the
//! card markup.

use maud::{html, Markup};

use super::links::Links;
use crate::app::{messages, ArticleCard, ArticleList, CardStyle, Region};

/// Inline `background-image` style for a thumbnail
pub(crate) fn background_image(url: &str) -> String {
    format!(
        "background-image: url('{}');",
        url.replace('\\', "%5C").replace('\'', "%27")
    )
}

/// Contents of the list container: the cards, or the region's message
pub fn render_article_list(list: &ArticleList, links: Links) -> Markup {
    match &list.cards {
        Region::Filled(cards) => html! {
            @for card in cards {
                (render_card(list.template.card_style, card, links))
            }
        },
        Region::Message(message) => html! {
            p.region-message { (message) }
        },
    }
}

pub fn render_card(style: CardStyle, card: &ArticleCard, links: Links) -> Markup {
    let href = links.article(card.index);
    match style {
        CardStyle::Grid => render_grid_card(card, &href),
        CardStyle::Listing => render_listing_card(card, &href),
    }
}

fn render_grid_card(card: &ArticleCard, href: &str) -> Markup {
    html! {
        a.article-item href=(href) {
            @if let Some(image) = &card.image {
                div.article-thumbnail style=(background_image(image)) {}
            } @else {
                div.article-thumbnail.placeholder-mixed {}
            }
            div.article-info {
                div.article-content {
                    h3.article-title { (card.title) }
                    div.article-meta {
                        span.meta-category { (card.category.grid_label()) }
                        span.meta-date { (card.date) }
                    }
                }
                p.article-summary { (card.summary) }
            }
        }
    }
}

fn render_listing_card(card: &ArticleCard, href: &str) -> Markup {
    let css = card.category.css_class();
    html! {
        article.article-card.animate-in {
            a href=(href) {
                div.card-image {
                    @if let Some(image) = &card.image {
                        div.card-image-inner style=(background_image(image)) {}
                    } @else {
                        div class={ "card-image-inner placeholder-" (css) } {}
                    }
                    span class={ "card-category " (css) } { (card.category.korean_label()) }
                }
                div.card-body {
                    h3.card-title { (card.title) }
                    p.card-excerpt { (card.summary) }
                    div.card-meta {
                        span { (card.date) }
                        span { (messages::READING_TIME) }
                    }
                }
            }
        }
    }
}
