//! Run configuration: which sites to scrape and which keywords to keep.
//!
//! Configuration comes either from a YAML file or from the built-in
//! [`scrapers`](crate::scrapers) registry. It is loaded and validated once at
//! startup; an invalid site stops the program before anything is fetched.
//!
//! # File Format
//!
//! ```yaml
//! sites:
//!   - name: BBC Science & Environment
//!     url: https://www.bbc.com/news/science_and_environment
//!     prefix: https://bbc.com
//!     link_selector: 'a[href ^= "/news"].gs-c-promo-heading'
//!     headline_selector: h3
//! keywords: [ocean, polar, carbon]   # optional, defaults to the built-in list
//! filter: true                       # optional, false disables keyword filtering
//! concurrency: 4
//! fetch_timeout_secs: 20
//! retries: 2
//! ```

use crate::error::ConfigError;
use crate::fetch::{RETRY_BASE_DELAY, RETRY_MAX_DELAY, RETRY_MAX_JITTER};
use crate::keywords::DEFAULT_KEYWORDS;
use crate::models::SiteDescriptor;
use crate::scrapers;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, instrument};

/// Longest accepted per-request timeout.
const MAX_FETCH_TIMEOUT_SECS: u64 = 3600;

fn default_filter() -> bool {
    true
}

fn default_concurrency() -> usize {
    4
}

fn default_fetch_timeout_secs() -> u64 {
    20
}

fn default_retries() -> usize {
    2
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsConfig {
    pub sites: Vec<SiteDescriptor>,
    /// `None` means [`DEFAULT_KEYWORDS`].
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    /// Whether to filter the merged headlines by keyword at all.
    #[serde(default = "default_filter")]
    pub filter: bool,
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    #[serde(default = "default_retries")]
    pub retries: usize,
}

impl NewsConfig {
    /// Configuration built from the site registry and the default keywords.
    pub fn builtin() -> Self {
        Self {
            sites: scrapers::all(),
            keywords: None,
            filter: default_filter(),
            concurrency: default_concurrency(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            retries: default_retries(),
        }
    }

    /// Read, parse and validate a YAML config file.
    #[instrument(level = "info")]
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        let config = Self::from_yaml(&raw)?;
        info!(sites = config.sites.len(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text.
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot run. Every site descriptor is
    /// checked here, before any fetch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sites.is_empty() {
            return Err(ConfigError::NoSites);
        }
        for site in &self.sites {
            site.validate()?;
        }
        if self.concurrency == 0 {
            return Err(ConfigError::InvalidSetting(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::InvalidSetting(
                "fetch_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.fetch_timeout_secs > MAX_FETCH_TIMEOUT_SECS {
            return Err(ConfigError::InvalidSetting(format!(
                "fetch_timeout_secs must be at most {}",
                MAX_FETCH_TIMEOUT_SECS
            )));
        }
        Ok(())
    }

    /// Keywords to filter with, or `None` when filtering is disabled.
    pub fn effective_keywords(&self) -> Option<Vec<String>> {
        if !self.filter {
            return None;
        }
        Some(match &self.keywords {
            Some(keywords) => keywords.clone(),
            None => DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        })
    }

    /// Deadline for a single HTTP request.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Deadline for one site, covering every retry attempt and the backoff
    /// between them.
    pub fn site_deadline(&self) -> Duration {
        let retries = u32::try_from(self.retries).unwrap_or(u32::MAX);
        let backoff: Duration = (0..retries.min(64))
            .map(|i| {
                RETRY_BASE_DELAY
                    .saturating_mul(1u32 << i.min(16))
                    .min(RETRY_MAX_DELAY)
                    .saturating_add(RETRY_MAX_JITTER)
            })
            .fold(Duration::ZERO, Duration::saturating_add);
        self.fetch_timeout()
            .saturating_mul(retries.saturating_add(1))
            .saturating_add(backoff)
    }
}
