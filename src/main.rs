//! # Headline Sieve
//!
//! Collects article headlines and links from several news sites and keeps
//! the ones matching a keyword list.
//!
//! ## Usage
//!
//! ```sh
//! headline_sieve -c sites.yaml -j ./json
//! ```
//!
//! ## Architecture
//!
//! 1. **Configuration**: site descriptors and keywords from a YAML file or the
//!    built-in registry, validated before anything is fetched
//! 2. **Fetching + extraction**: every site concurrently, one selector-driven
//!    engine for all of them; a failing site is logged and skipped
//! 3. **Merge + filter**: results merged in configured order (later site wins
//!    on duplicate headlines), then filtered by keyword
//! 4. **Output**: terminal listing, optional JSON digest

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregate;
mod cli;
mod config;
mod error;
mod extract;
mod fetch;
mod keywords;
mod models;
mod outputs;
mod scrapers;
mod utils;

use aggregate::{AggregateOptions, aggregate};
use cli::Cli;
use config::NewsConfig;
use error::ConfigError;
use fetch::{HttpFetcher, RETRY_BASE_DELAY, RetryFetch};
use models::Digest;
use outputs::{json, text};
use utils::{ensure_writable_dir, time_of_day, upcase};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("headline_sieve starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    if args.list_sites {
        for (key, site) in scrapers::keys().zip(scrapers::all()) {
            println!("{:<14} {} ({})", key, site.name, site.url);
        }
        return Ok(());
    }

    // ---- Configuration (fatal on error) ----
    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };
    let keywords = config.effective_keywords();
    info!(
        sites = config.sites.len(),
        keywords = keywords.as_ref().map(Vec::len),
        concurrency = config.concurrency,
        retries = config.retries,
        "Configuration ready"
    );

    // Early check: ensure JSON output dir is writable
    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Fetch, extract, merge, filter ----
    let fetcher = RetryFetch::new(
        HttpFetcher::new(config.fetch_timeout())?,
        config.retries,
        RETRY_BASE_DELAY,
    );
    let options = AggregateOptions {
        concurrency: config.concurrency,
        fetch_timeout: Some(config.site_deadline()),
    };
    let result = aggregate(&config.sites, &fetcher, keywords.as_deref(), &options).await;

    for summary in &result.per_site {
        debug!(site = %summary.site, extracted = summary.extracted, "Site summary");
    }
    for diagnostic in &result.diagnostics {
        warn!(
            site = %diagnostic.site,
            url = %diagnostic.url,
            error = %diagnostic.error,
            "Site contributed no articles"
        );
    }
    if result.diagnostics.len() == config.sites.len() {
        error!(failed = result.diagnostics.len(), "Every site failed");
        return Err("no site could be scraped".into());
    }

    // ---- Output ----
    let edition = time_of_day();
    print!("{}", text::render(&result.articles, &upcase(&edition)));

    if let Some(dir) = &args.json_output_dir {
        let now = Local::now();
        let digest = Digest::new(
            now.date_naive().to_string(),
            edition,
            now.time().format("%H:%M:%S").to_string(),
            &result.articles,
        );
        if let Err(e) = json::write_digest(&digest, dir).await {
            error!(error = %e, "Failed to write JSON digest");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = result.articles.len(),
        failed_sites = result.diagnostics.len(),
        "Execution complete"
    );

    Ok(())
}

/// Resolve the run configuration from the config file or the built-in
/// registry, apply CLI overrides, and validate the result.
fn build_config(args: &Cli) -> Result<NewsConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => {
            if !args.sites.is_empty() {
                warn!("--site is ignored when --config is given");
            }
            NewsConfig::load(path)?
        }
        None => {
            let mut config = NewsConfig::builtin();
            if !args.sites.is_empty() {
                config.sites = args
                    .sites
                    .iter()
                    .map(|key| scrapers::lookup(key))
                    .collect::<Result<_, _>>()?;
            }
            config
        }
    };

    if !args.keywords.is_empty() {
        config.keywords = Some(args.keywords.clone());
    }
    if args.no_filter {
        config.filter = false;
    }
    if let Some(concurrency) = args.concurrency {
        config.concurrency = concurrency;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.fetch_timeout_secs = timeout_secs;
    }
    if let Some(retries) = args.retries {
        config.retries = retries;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse `argv` with the config file fallback cleared, so a
    /// `HEADLINE_SIEVE_CONFIG` in the environment cannot redirect the test.
    fn parse_args<const N: usize>(argv: [&str; N]) -> Cli {
        let mut args = Cli::parse_from(argv);
        args.config = None;
        args
    }

    #[test]
    fn test_parse_args_ignores_config_env() {
        let args = parse_args(["headline_sieve"]);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_build_config_from_file_with_overrides() {
        let path = std::env::temp_dir().join(format!("headline_sieve_main_{}.yaml", std::process::id()));
        std::fs::write(&path, include_str!("../sites.yaml")).unwrap();

        let mut args = parse_args(["headline_sieve", "--retries", "1"]);
        args.config = Some(path.to_string_lossy().into_owned());
        let config = build_config(&args).unwrap();
        assert_eq!(config.sites.len(), 3);
        assert_eq!(config.retries, 1);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_build_config_huge_timeout_is_fatal() {
        let args = parse_args(["headline_sieve", "--timeout-secs", "18446744073709551615"]);
        assert!(matches!(build_config(&args), Err(ConfigError::InvalidSetting(_))));
    }

    #[test]
    fn test_build_config_builtin_defaults() {
        let args = parse_args(["headline_sieve"]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.sites.len(), 3);
        assert!(config.effective_keywords().is_some());
    }

    #[test]
    fn test_build_config_selects_sites_and_overrides() {
        let args = parse_args([
            "headline_sieve",
            "-s",
            "mlive",
            "-s",
            "bbc",
            "-k",
            "Ocean",
            "--concurrency",
            "1",
            "--retries",
            "0",
        ]);
        let config = build_config(&args).unwrap();
        let names: Vec<&str> = config.sites.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Mlive", "BBC Science & Environment"]);
        assert_eq!(config.effective_keywords(), Some(vec!["Ocean".to_string()]));
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.retries, 0);
    }

    #[test]
    fn test_build_config_no_filter() {
        let args = parse_args(["headline_sieve", "--no-filter"]);
        assert_eq!(build_config(&args).unwrap().effective_keywords(), None);
    }

    #[test]
    fn test_build_config_unknown_site_is_fatal() {
        let args = parse_args(["headline_sieve", "-s", "nowhere"]);
        assert!(matches!(build_config(&args), Err(ConfigError::UnknownSite(_))));
    }

    #[test]
    fn test_build_config_zero_concurrency_is_fatal() {
        let args = parse_args(["headline_sieve", "--concurrency", "0"]);
        assert!(matches!(build_config(&args), Err(ConfigError::InvalidSetting(_))));
    }
}
