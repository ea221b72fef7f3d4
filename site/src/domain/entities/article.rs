//! Article domain entity
//!
//! One entry of `data/articles.json`. Every field is optional on the wire;
//! display helpers apply the fallbacks the pages rely on.

use serde::{Deserialize, Deserializer, Serialize};

/// Prefix the translation pipeline writes when a summary could not be translated
pub const TRANSLATION_FAILED_MARKER: &str = "[번역 실패]";

/// The one source whose articles are classified as film
pub const FILM_SOURCE: &str = "Variety";

/// Category derived from an article's source, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Film,
    Theater,
}

impl Category {
    /// Classify by source: `Variety` is film, everything else is theater
    pub fn from_source(source: &str) -> Self {
        if source == FILM_SOURCE {
            Category::Film
        } else {
            Category::Theater
        }
    }

    /// Resolve the `cat` query parameter.
    ///
    /// Absent means theater. Any value other than `theater` selects film,
    /// which is how existing links in the wild behave.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None | Some("theater") => Category::Theater,
            Some(_) => Category::Film,
        }
    }

    /// Upper-case label used on home grid cards
    pub fn grid_label(&self) -> &'static str {
        match self {
            Category::Film => "FILM",
            Category::Theater => "THEATER",
        }
    }

    /// Korean label used on category cards and the detail badge
    pub fn korean_label(&self) -> &'static str {
        match self {
            Category::Film => "영화",
            Category::Theater => "연극",
        }
    }

    /// CSS modifier class
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Film => "film",
            Category::Theater => "theater",
        }
    }

    /// Element id of the category page container
    pub fn container_id(&self) -> &'static str {
        match self {
            Category::Film => "filmArticles",
            Category::Theater => "theaterArticles",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Film => write!(f, "film"),
            Category::Theater => write!(f, "theater"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "film" => Ok(Category::Film),
            "theater" => Ok(Category::Theater),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// Deserialize null as the default value
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// An article record as published in the feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    /// Optional stable identifier. Deep links still use the array position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub title: String,
    pub title_kr: Option<String>,
    pub summary_kr: Option<String>,
    pub content_kr: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub source: String,
    pub link: Option<String>,
}

/// Treat empty strings like missing values
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Article {
    pub fn category(&self) -> Category {
        Category::from_source(&self.source)
    }

    /// Korean title when present, otherwise the original title
    pub fn display_title(&self) -> &str {
        non_empty(&self.title_kr).unwrap_or(&self.title)
    }

    /// The Korean summary, unless it is missing or marks a failed translation
    pub fn valid_summary(&self) -> Option<&str> {
        non_empty(&self.summary_kr).filter(|s| !s.starts_with(TRANSLATION_FAILED_MARKER))
    }

    /// Summary shown on the home grid: the valid summary, else the original title
    pub fn display_summary(&self) -> &str {
        self.valid_summary().unwrap_or(&self.title)
    }

    /// Body text for the detail page.
    ///
    /// The Korean body, else whatever summary exists (flagged or not).
    pub fn body_text(&self) -> Option<&str> {
        non_empty(&self.content_kr).or_else(|| non_empty(&self.summary_kr))
    }

    pub fn image_url(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    pub fn raw_date(&self) -> &str {
        self.date.as_deref().unwrap_or_default()
    }
}

/// Parse a deep-link id into an array position.
///
/// Only canonical non-negative integers name a position; `"01"`, `"+1"` or
/// `"-1"` do not.
pub fn parse_position(id: &str) -> Option<usize> {
    let canonical = !id.is_empty()
        && id.bytes().all(|b| b.is_ascii_digit())
        && (id == "0" || !id.starts_with('0'));
    if canonical {
        id.parse().ok()
    } else {
        None
    }
}

/// Position of the first article sharing `candidate`'s link
pub fn original_index(articles: &[Article], candidate: &Article) -> Option<usize> {
    articles.iter().position(|a| a.link == candidate.link)
}
