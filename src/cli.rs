//! Command-line interface definitions for Headline Sieve.
//!
//! All options can be given as flags; the config path can also come from the
//! environment.

use clap::Parser;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Built-in sites, default keywords
/// headline_sieve
///
/// # Sites and keywords from a config file, digest written as JSON
/// headline_sieve -c sites.yaml -j ./json
///
/// # Two built-in sites, custom keywords
/// headline_sieve -s bbc -s mlive -k climate -k ocean
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a YAML config file with sites and keywords
    #[arg(short, long, env = "HEADLINE_SIEVE_CONFIG")]
    pub config: Option<String>,

    /// Built-in site to scrape (repeatable); ignored when --config is given
    #[arg(short, long = "site")]
    pub sites: Vec<String>,

    /// Keyword to filter headlines by (repeatable); replaces configured keywords
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,

    /// Print every headline, without keyword filtering
    #[arg(long, conflicts_with = "keywords")]
    pub no_filter: bool,

    /// Output directory for the JSON digest
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Maximum number of sites fetched at once
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Seconds before a site fetch is abandoned
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Retries per site after a failed fetch
    #[arg(long)]
    pub retries: Option<usize>,

    /// List the built-in sites and exit
    #[arg(long)]
    pub list_sites: bool,
}
