// src/pipeline.rs

use std::path::PathBuf;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::error::ScrapeError;
use crate::{extract, fetch, output, reverse};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub participants: usize,
    pub output: PathBuf,
    pub reversed_output: Option<PathBuf>,
}

/// Fetch → parse → extract → write, stopping at the first error.
#[instrument(skip_all, fields(url = %cfg.url))]
pub async fn run(cfg: &Config) -> Result<RunSummary, ScrapeError> {
    // resolved up front so a bad path fails before anything is fetched
    let reversed_output = if cfg.with_reverse_name {
        Some(reverse::reversed_path(&cfg.output)?)
    } else {
        None
    };

    let client = fetch::build_client(&cfg.fetch)?;
    let body = fetch::fetch_page(&client, &cfg.url).await?;

    let records = extract::parse_participants(&body);
    let participants = records.participant_count();
    if participants == 0 {
        warn!("no participants found");
    } else {
        info!(participants, "found participants");
    }

    output::write_csv(&cfg.output, &records)?;

    if let Some(path) = &reversed_output {
        output::write_csv(path, &reverse::reversed_records(&records))?;
    }

    Ok(RunSummary {
        participants,
        output: cfg.output.clone(),
        reversed_output,
    })
}
