//! Data models for site descriptors and extracted articles.
//!
//! - [`SiteDescriptor`]: declarative rule describing how to pull headlines
//!   and links out of one site's front page
//! - [`ArticleCollection`]: headline → link mapping produced by extraction
//!   and merged by the aggregator
//! - [`ArticleEntry`] and [`Digest`]: serializable presentation payload

use crate::error::ConfigError;
use crate::extract::compile_selector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// Headline → link. Keys are trimmed headline text, stored as found on the page.
pub type ArticleCollection = BTreeMap<String, String>;

/// How to extract articles from one site.
///
/// `link_selector` picks every anchor that may carry an article link.
/// `headline_selector` is evaluated relative to each of those anchors and the
/// first matching descendant holds the headline; `None` means the anchor's own
/// text is the headline.
///
/// # Example
///
/// ```yaml
/// - name: BBC Science & Environment
///   url: https://www.bbc.com/news/science_and_environment
///   prefix: https://bbc.com
///   link_selector: 'a[href ^= "/news"].gs-c-promo-heading'
///   headline_selector: h3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteDescriptor {
    /// Display label, used in logs and diagnostics.
    pub name: String,
    /// Page to fetch.
    pub url: String,
    /// Prepended to every extracted `href`. Empty when links are absolute.
    #[serde(default)]
    pub prefix: String,
    /// Selector for candidate link elements.
    pub link_selector: String,
    /// Selector for the headline inside each link element.
    #[serde(default)]
    pub headline_selector: Option<String>,
}

impl SiteDescriptor {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        prefix: impl Into<String>,
        link_selector: impl Into<String>,
        headline_selector: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            prefix: prefix.into(),
            link_selector: link_selector.into(),
            headline_selector: headline_selector.map(str::to_string),
        }
    }

    /// Check the descriptor before any fetch happens.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidDescriptor`] when:
    /// - `link_selector` is empty
    /// - `headline_selector` is present but empty (absence must be `None`)
    /// - either selector does not compile
    /// - `url` is not an absolute URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidDescriptor {
            site: self.name.clone(),
            reason,
        };

        if self.link_selector.trim().is_empty() {
            return Err(invalid("link_selector is empty".to_string()));
        }
        compile_selector(&self.link_selector).map_err(|e| invalid(e.to_string()))?;

        if let Some(headline_selector) = &self.headline_selector {
            if headline_selector.trim().is_empty() {
                return Err(invalid(
                    "headline_selector is empty; omit it to use the link text".to_string(),
                ));
            }
            compile_selector(headline_selector).map_err(|e| invalid(e.to_string()))?;
        }

        Url::parse(&self.url).map_err(|e| invalid(format!("url `{}`: {}", self.url, e)))?;

        Ok(())
    }
}

/// A single headline and where it links to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleEntry {
    pub headline: String,
    pub link: String,
}

/// The filtered headlines of one run, as written to the JSON output.
///
/// `time_of_day` names the edition: `"morning"`, `"afternoon"` or `"evening"`.
#[derive(Debug, Deserialize, Serialize)]
pub struct Digest {
    /// Date of the run in `YYYY-MM-DD` format.
    pub local_date: String,
    pub time_of_day: String,
    pub local_time: String,
    pub articles: Vec<ArticleEntry>,
}

impl Digest {
    pub fn new(
        local_date: String,
        time_of_day: String,
        local_time: String,
        articles: &ArticleCollection,
    ) -> Self {
        Self {
            local_date,
            time_of_day,
            local_time,
            articles: articles
                .iter()
                .map(|(headline, link)| ArticleEntry {
                    headline: headline.clone(),
                    link: link.clone(),
                })
                .collect(),
        }
    }
}
