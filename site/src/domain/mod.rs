//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: feed records and visitor settings
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
