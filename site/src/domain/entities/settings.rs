//! Visitor preferences
//!
//! Theme and cookie-consent flags, loaded and saved through a
//! `SettingsStore` and passed explicitly into page rendering.

use serde::{Deserialize, Serialize};

/// Color theme. The site is dark unless the visitor switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Cookie banner decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookieConsent {
    Accepted,
    Rejected,
}

impl std::fmt::Display for CookieConsent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CookieConsent::Accepted => write!(f, "accepted"),
            CookieConsent::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for CookieConsent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(CookieConsent::Accepted),
            "rejected" => Ok(CookieConsent::Rejected),
            _ => Err(format!("Unknown cookie consent: {}", s)),
        }
    }
}

/// Persisted preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_consent: Option<CookieConsent>,
}

/// Partial update; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsUpdate {
    pub theme: Option<String>,
    pub cookie_consent: Option<String>,
}

impl Settings {
    /// Apply an update, validating every provided value before changing anything
    pub fn apply(self, update: &SettingsUpdate) -> Result<Self, String> {
        let theme = match update.theme.as_deref() {
            Some(value) => value.parse()?,
            None => self.theme,
        };
        let cookie_consent = match update.cookie_consent.as_deref() {
            Some(value) => Some(value.parse()?),
            None => self.cookie_consent,
        };
        Ok(Settings {
            theme,
            cookie_consent,
        })
    }
}
