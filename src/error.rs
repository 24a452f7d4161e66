// src/error.rs

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Every way a scrape run can fail. All variants are terminal for the run;
/// row-level anomalies in the page never surface here.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Missing or unusable command line input.
    #[error("{0}")]
    Config(String),

    /// The HTTP client could not be set up (bad TLS backend, invalid header).
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network failure, timeout, or an unreadable response body.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with anything other than 200 OK.
    #[error("status code error: {status} {reason} ({url})")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    /// The output file could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ScrapeError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn config_path(what: &str, path: &Path) -> Self {
        Self::Config(format!("{what} {} is not valid UTF-8", path.display()))
    }
}
