//! Page addresses

use crate::domain::entities::Category;

/// How pages link to each other
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Links {
    /// Query-string URLs answered by the running server
    #[default]
    Query,
    /// One file per page, as written by the exporter
    Static,
}

impl Links {
    pub fn home(self) -> &'static str {
        "index.html"
    }

    pub fn article(self, index: usize) -> String {
        match self {
            Links::Query => format!("article.html?id={}", index),
            Links::Static => format!("article-{}.html", index),
        }
    }

    pub fn category(self, category: Category) -> String {
        match self {
            Links::Query => format!("category.html?cat={}", category),
            Links::Static => format!("category-{}.html", category),
        }
    }
}
