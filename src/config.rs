// src/config.rs

use clap::Parser;
use std::{path::PathBuf, time::Duration};
use url::Url;

use crate::error::ScrapeError;
use crate::fetch::FetchConfig;

/// Raw command line. `url` stays optional here so a missing value is
/// reported as a configuration error rather than a clap usage error.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Scrape a championship participant table into CSV"
)]
pub struct Args {
    /// URL of the page to scrape
    #[arg(long)]
    pub url: Option<String>,

    /// Output CSV file path
    #[arg(long, default_value = "participants.csv")]
    pub output: PathBuf,

    /// Also write a CSV with driver names as "Lastname Firstname..."
    #[arg(long)]
    pub with_reverse_name: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: Url,
    pub output: PathBuf,
    pub with_reverse_name: bool,
    pub fetch: FetchConfig,
}

impl Config {
    pub fn new(url: Url, output: impl Into<PathBuf>) -> Self {
        Self {
            url,
            output: output.into(),
            with_reverse_name: false,
            fetch: FetchConfig::default(),
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = ScrapeError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let raw = args
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ScrapeError::config("URL is required. Use --url flag."))?;

        let url = parse_page_url(raw)?;

        if args.timeout == 0 {
            return Err(ScrapeError::config("--timeout must be at least 1 second"));
        }

        Ok(Self {
            url,
            output: args.output,
            with_reverse_name: args.with_reverse_name,
            fetch: FetchConfig {
                timeout: Duration::from_secs(args.timeout),
                ..FetchConfig::default()
            },
        })
    }
}

/// Only absolute http(s) URLs are accepted.
pub fn parse_page_url(raw: &str) -> Result<Url, ScrapeError> {
    let url = Url::parse(raw).map_err(|e| ScrapeError::config(format!("invalid --url {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ScrapeError::config(format!(
            "invalid --url {raw:?}: only http/https are allowed, got {other}"
        ))),
    }
}
