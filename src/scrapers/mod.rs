//! Built-in site descriptors.
//!
//! Each submodule describes one news source as a [`SiteDescriptor`] instead
//! of hand-written scraping code, so every site runs through the same
//! extraction engine.
//!
//! # Supported Sources
//!
//! | Key | Module | Page | Headline |
//! |-----|--------|------|----------|
//! | `bbc` | [`bbc`] | Science & Environment section | `<h3>` inside the link |
//! | `detroit_news` | [`detroit_news`] | News front page | link text |
//! | `mlive` | [`mlive`] | Home page | link text |
//!
//! Run with `--site <key>` to pick a subset, or `--list-sites` to print them.

use crate::error::ConfigError;
use crate::models::SiteDescriptor;

pub mod bbc;
pub mod detroit_news;
pub mod mlive;

/// Registry keys paired with their descriptor builders, in default run order.
const REGISTRY: &[(&str, fn() -> SiteDescriptor)] = &[
    ("bbc", bbc::descriptor),
    ("detroit_news", detroit_news::descriptor),
    ("mlive", mlive::descriptor),
];

/// Every built-in site, in registry order.
pub fn all() -> Vec<SiteDescriptor> {
    REGISTRY.iter().map(|(_, build)| build()).collect()
}

/// Registry keys, in registry order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(key, _)| *key)
}

/// Look up a built-in site by key.
pub fn lookup(key: &str) -> Result<SiteDescriptor, ConfigError> {
    REGISTRY
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, build)| build())
        .ok_or_else(|| ConfigError::UnknownSite(key.to_string()))
}
