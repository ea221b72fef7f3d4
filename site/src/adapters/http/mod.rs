//! HTTP adapters

pub mod client;

pub use client::HttpFeedSource;
