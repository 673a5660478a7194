//! Run extraction across many sites and merge the results.
//!
//! Each site is fetched and extracted as an independent task; tasks run
//! concurrently (up to [`AggregateOptions::concurrency`] at a time). A failing
//! site is recorded as a [`Diagnostic`] and contributes no articles, but never
//! stops the others.
//!
//! # Merge Order
//!
//! Completed sites are put back into configured order before merging, so when
//! two sites report the same headline the later-configured site wins no matter
//! which finished first.

use crate::error::{FetchError, SiteError};
use crate::extract::extract;
use crate::fetch::Fetch;
use crate::keywords::filter_for_keywords;
use crate::models::{ArticleCollection, SiteDescriptor};
use futures::stream::{self, StreamExt};
use itertools::Itertools;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Tuning for an aggregate run.
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Maximum number of sites fetched at the same time.
    pub concurrency: usize,
    /// Per-site fetch deadline. A site that misses it counts as a fetch failure.
    pub fetch_timeout: Option<Duration>,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            concurrency: 4,
            fetch_timeout: Some(Duration::from_secs(20)),
        }
    }
}

/// A site that contributed nothing, and why.
#[derive(Debug)]
pub struct Diagnostic {
    pub site: String,
    pub url: String,
    pub error: SiteError,
}

/// How many articles a successful site produced, before keyword filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    pub site: String,
    pub extracted: usize,
}

/// Result of [`aggregate`]: the merged (and possibly filtered) articles plus
/// the side-channel of per-site failures.
#[derive(Debug, Default)]
pub struct Aggregate {
    pub articles: ArticleCollection,
    pub diagnostics: Vec<Diagnostic>,
    pub per_site: Vec<SiteSummary>,
}

/// Fetch and extract every site, merge the results, then apply `keywords`.
///
/// `keywords == None` returns the unfiltered merge.
#[instrument(level = "info", skip_all, fields(sites = descriptors.len()))]
pub async fn aggregate<F>(
    descriptors: &[SiteDescriptor],
    fetcher: &F,
    keywords: Option<&[String]>,
    options: &AggregateOptions,
) -> Aggregate
where
    F: Fetch,
{
    let t0 = Instant::now();
    let concurrency = options.concurrency.max(1);

    let outcomes: Vec<(usize, Result<ArticleCollection, SiteError>)> =
        stream::iter(descriptors.iter().enumerate())
            .map(|(index, site)| async move {
                (index, scrape_site(site, fetcher, options.fetch_timeout).await)
            })
            .buffer_unordered(concurrency)
            .collect()
            .await;

    let mut result = Aggregate::default();
    for (index, outcome) in outcomes.into_iter().sorted_by_key(|(index, _)| *index) {
        let site = &descriptors[index];
        match outcome {
            Ok(articles) => {
                info!(site = %site.name, count = articles.len(), "Extracted site articles");
                result.per_site.push(SiteSummary {
                    site: site.name.clone(),
                    extracted: articles.len(),
                });
                result.articles.extend(articles);
            }
            Err(error) => {
                warn!(site = %site.name, url = %site.url, error = %error, "Site failed; skipping");
                result.diagnostics.push(Diagnostic {
                    site: site.name.clone(),
                    url: site.url.clone(),
                    error,
                });
            }
        }
    }

    let merged = result.articles.len();
    if let Some(keywords) = keywords {
        result.articles = filter_for_keywords(&result.articles, keywords);
    }

    info!(
        merged,
        kept = result.articles.len(),
        failed = result.diagnostics.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Aggregation complete"
    );
    result
}

/// Fetch one site and extract its articles.
#[instrument(level = "info", skip_all, fields(site = %site.name))]
async fn scrape_site<F>(
    site: &SiteDescriptor,
    fetcher: &F,
    fetch_timeout: Option<Duration>,
) -> Result<ArticleCollection, SiteError>
where
    F: Fetch,
{
    let markup = match fetch_timeout {
        Some(limit) => tokio::time::timeout(limit, fetcher.fetch(&site.url))
            .await
            .map_err(|_| FetchError::Timeout(limit))??,
        None => fetcher.fetch(&site.url).await?,
    };
    debug!(bytes = markup.len(), "Fetched markup");

    Ok(extract(&markup, site)?)
}
