//! Error types for fetching, extraction, and configuration.
//!
//! Errors fall into two groups:
//!
//! - **Per-site** ([`FetchError`], [`ParseError`], wrapped in [`SiteError`]):
//!   isolated by the aggregator, turned into diagnostics, never propagated.
//! - **Startup** ([`ConfigError`]): fatal, raised before any site is fetched.
//!
//! A link element without an `href`, or without a matching headline
//! descendant, is not an error at all. Extraction skips it silently.

use std::time::Duration;

/// Failure to obtain markup for a site.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with HTTP {status}")]
    Status { status: u16, url: String },

    #[error("no response within {0:?}")]
    Timeout(Duration),
}

/// Failure to query a site's markup.
///
/// The HTML parser recovers from malformed markup, so in practice this is
/// raised when a selector cannot be compiled.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// Why a single site contributed nothing to an aggregate run.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("extraction failed: {0}")]
    Parse(#[from] ParseError),
}

/// Configuration problems. These abort the program before any fetch.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid site descriptor `{site}`: {reason}")]
    InvalidDescriptor { site: String, reason: String },

    #[error("no sites configured")]
    NoSites,

    #[error("unknown site `{0}` (see --list-sites)")]
    UnknownSite(String),

    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}
