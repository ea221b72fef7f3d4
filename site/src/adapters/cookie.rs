//! Cookie settings store
//!
//! Each visitor's preferences travel in their own `theme` and
//! `cookie_consent` cookies. Whatever a visitor has not chosen yet comes
//! from the site-wide defaults.

use async_trait::async_trait;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tokio::sync::Mutex;

use crate::domain::entities::{CookieConsent, Settings, Theme};
use crate::domain::ports::SettingsStore;
use crate::error::SettingsError;

pub const THEME_COOKIE: &str = "theme";
pub const CONSENT_COOKIE: &str = "cookie_consent";

/// Overlay the visitor's cookies on the defaults. Unknown values are ignored.
pub fn settings_from_jar(jar: &CookieJar, defaults: Settings) -> Settings {
    let theme = jar
        .get(THEME_COOKIE)
        .and_then(|cookie| parse_cookie::<Theme>(cookie))
        .unwrap_or(defaults.theme);
    let cookie_consent = jar
        .get(CONSENT_COOKIE)
        .and_then(|cookie| parse_cookie::<CookieConsent>(cookie))
        .or(defaults.cookie_consent);
    Settings {
        theme,
        cookie_consent,
    }
}

fn parse_cookie<T>(cookie: &Cookie<'_>) -> Option<T>
where
    T: std::str::FromStr<Err = String>,
{
    match cookie.value().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("Ignoring cookie {}: {}", cookie.name(), e);
            None
        }
    }
}

fn preference_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .permanent()
        .build()
}

/// Settings read from and written to one request's cookie jar
pub struct CookieSettingsStore {
    defaults: Settings,
    jar: Mutex<CookieJar>,
}

impl CookieSettingsStore {
    pub fn new(jar: CookieJar, defaults: Settings) -> Self {
        Self {
            defaults,
            jar: Mutex::new(jar),
        }
    }

    /// The jar with every saved cookie, for the response
    pub async fn jar(&self) -> CookieJar {
        self.jar.lock().await.clone()
    }
}

#[async_trait]
impl SettingsStore for CookieSettingsStore {
    async fn load(&self) -> Result<Settings, SettingsError> {
        let jar = self.jar.lock().await;
        Ok(settings_from_jar(&jar, self.defaults))
    }

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let mut jar = self.jar.lock().await;
        let mut next = jar
            .clone()
            .add(preference_cookie(THEME_COOKIE, settings.theme.to_string()));
        if let Some(consent) = settings.cookie_consent {
            next = next.add(preference_cookie(CONSENT_COOKIE, consent.to_string()));
        }
        *jar = next;
        Ok(())
    }
}
