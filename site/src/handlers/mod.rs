//! HTTP handlers
//!
//! Page handlers always answer 200 with whatever each region could render.
//! The JSON endpoints report failures through `AppError`.

pub mod audit;
pub mod pages;
pub mod preferences;

use axum::http::{header, HeaderMap};

pub use audit::get_audit;
pub use pages::{article, category, home};
pub use preferences::{get_preferences, put_preferences};

/// Check if the client wants JSON response
pub(crate) fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}
