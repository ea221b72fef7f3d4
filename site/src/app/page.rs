//! Page templates and region outcomes
//!
//! The home grid and the category listing share one list renderer; a
//! `PageTemplate` says where the cards go, which articles qualify and how
//! each card looks.

use crate::domain::entities::{Article, Category};

/// Fixed messages shown in place of content
pub mod messages {
    pub const HOME_UNAVAILABLE: &str = "최신 뉴스를 불러오는 중입니다...";
    pub const ARTICLE_MISSING_ID: &str = "기사를 찾을 수 없습니다.";
    pub const ARTICLE_NOT_FOUND: &str = "해당 기사가 존재하지 않습니다.";
    pub const ARTICLE_UNAVAILABLE: &str = "기사를 불러오는 중 오류가 발생했습니다.";
    pub const CATEGORY_EMPTY: &str = "아직 등록된 기사가 없습니다.";
    pub const CATEGORY_UNAVAILABLE: &str = "데이터를 불러오는 중 오류가 발생했습니다.";
    pub const RANKING_EMPTY: &str = "이번 주 랭킹 데이터가 없습니다.";
    pub const PICKS_EMPTY: &str = "이번 주 추천작이 없습니다.";
    pub const BOX_OFFICE_UNAVAILABLE: &str = "데이터를 불러오지 못했습니다.";
    pub const BODY_MISSING: &str = "본문 내용이 없습니다.";
    pub const SNIPPET_FALLBACK: &str = "내용 보기";
    pub const READING_TIME: &str = "1분 읽기";
}

/// Characters of summary shown on a category card
pub const SNIPPET_CHARS: usize = 80;

/// What a page region ends up holding after one render pass
#[derive(Debug, Clone, PartialEq)]
pub enum Region<T> {
    Filled(T),
    Message(&'static str),
}

impl<T> Region<T> {
    pub fn filled(&self) -> Option<&T> {
        match self {
            Region::Filled(value) => Some(value),
            Region::Message(_) => None,
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Region::Filled(_) => None,
            Region::Message(msg) => Some(*msg),
        }
    }
}

/// How a card is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Home grid: thumbnail, upper-case label, full date, summary
    Grid,
    /// Category listing: image with Korean badge, snippet, short date
    Listing,
}

/// Per-page configuration for the shared list renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTemplate {
    /// Element id the cards are written into
    pub container_id: &'static str,
    /// Keep only articles of this category; `None` keeps all
    pub filter: Option<Category>,
    pub card_style: CardStyle,
    /// Shown when the filter leaves nothing; `None` renders an empty container
    pub empty_message: Option<&'static str>,
    pub error_message: &'static str,
}

impl PageTemplate {
    pub fn home() -> Self {
        Self {
            container_id: "article-list",
            filter: None,
            card_style: CardStyle::Grid,
            empty_message: None,
            error_message: messages::HOME_UNAVAILABLE,
        }
    }

    pub fn category(category: Category) -> Self {
        Self {
            container_id: category.container_id(),
            filter: Some(category),
            card_style: CardStyle::Listing,
            empty_message: Some(messages::CATEGORY_EMPTY),
            error_message: messages::CATEGORY_UNAVAILABLE,
        }
    }

    pub fn accepts(&self, article: &Article) -> bool {
        self.filter
            .map(|category| article.category() == category)
            .unwrap_or(true)
    }
}

/// Summary cut to `max_chars` characters, with `...` when anything was cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}
