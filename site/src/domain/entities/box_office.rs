//! Box-office domain entities
//!
//! Weekly Broadway grosses and off-Broadway recommendations from
//! `data/boxoffice.json`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accept a string, number or null and keep it as display text
fn display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// One ranked Broadway show for the week
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxOfficeEntry {
    /// Display-only, never recomputed
    #[serde(deserialize_with = "display_text")]
    pub rank: Option<String>,
    pub show: String,
    pub theater: Option<String>,
    pub description_kr: Option<String>,
    #[serde(deserialize_with = "display_text")]
    pub gross_formatted: Option<String>,
    #[serde(deserialize_with = "display_text")]
    pub avg_ticket: Option<String>,
    #[serde(deserialize_with = "display_text")]
    pub attendance: Option<String>,
    #[serde(deserialize_with = "display_text")]
    pub capacity: Option<String>,
}

impl BoxOfficeEntry {
    pub fn theater(&self) -> Option<&str> {
        self.theater.as_deref().filter(|s| !s.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.description_kr.as_deref().filter(|s| !s.is_empty())
    }
}

/// An off-Broadway pick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub title: String,
    pub reason: String,
}

/// The whole box-office document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxOfficeReport {
    pub broadway: Option<Vec<BoxOfficeEntry>>,
    pub recommendations: Option<Vec<Recommendation>>,
}

impl BoxOfficeReport {
    /// Ranked entries, `None` when the list is absent or empty
    pub fn ranking(&self) -> Option<&[BoxOfficeEntry]> {
        self.broadway.as_deref().filter(|list| !list.is_empty())
    }

    /// Recommendations, `None` when the list is absent or empty
    pub fn picks(&self) -> Option<&[Recommendation]> {
        self.recommendations
            .as_deref()
            .filter(|list| !list.is_empty())
    }
}
