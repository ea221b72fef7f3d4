//! HTML rendering
//!
//! View models from the application layer become maud markup here. All
//! feed text is escaped; nothing from the feed is injected as raw HTML.

pub mod box_office;
pub mod cards;
pub mod date;
pub mod detail;
pub mod layout;
pub mod links;

pub use cards::render_article_list;
pub use date::{display_offset, DateFormatter, DateStyle, DEFAULT_UTC_OFFSET_HOURS};
pub use layout::{article_page, category_page, home_page, SITE_NAME};
pub use links::Links;
