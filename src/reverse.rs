// src/reverse.rs

use std::path::{Path, PathBuf};

use crate::error::ScrapeError;
use crate::record::RecordSet;

/// Suffix inserted before the extension of the reversed-name output file.
pub const REVERSED_SUFFIX: &str = "-name-reversed";

/// Moves the last whitespace-separated token to the front:
/// `"Anna Maria Berg"` becomes `"Berg Anna Maria"`. Names with fewer than
/// two tokens are returned unchanged.
pub fn reverse_driver_name(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} {}", last, rest.join(" ")),
        _ => name.to_string(),
    }
}

/// Copy of `records` with every participant's driver name reversed.
pub fn reversed_records(records: &RecordSet) -> RecordSet {
    records.map_participants(|mut record| {
        record.driver = reverse_driver_name(&record.driver);
        record
    })
}

/// `participants.csv` -> `participants-name-reversed.csv`; a name without a
/// dot gets the suffix appended.
pub fn reversed_filename(original: &str) -> String {
    match original.rfind('.') {
        Some(dot) => format!("{}{}{}", &original[..dot], REVERSED_SUFFIX, &original[dot..]),
        None => format!("{original}{REVERSED_SUFFIX}"),
    }
}

/// Path form of [`reversed_filename`]. Paths that are not UTF-8 are rejected
/// rather than written somewhere else.
pub fn reversed_path(original: &Path) -> Result<PathBuf, ScrapeError> {
    let name = original
        .to_str()
        .ok_or_else(|| ScrapeError::config_path("--output", original))?;
    Ok(PathBuf::from(reversed_filename(name)))
}
