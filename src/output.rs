// src/output.rs

use std::{fs::File, io::Write, path::Path};

use csv::Writer;
use tracing::info;

use crate::error::ScrapeError;
use crate::record::RecordSet;

/// Writes every row, header first, as comma-separated CSV.
pub fn write_records<W: Write>(writer: W, records: &RecordSet) -> csv::Result<()> {
    let mut wtr = Writer::from_writer(writer);
    for record in records.rows() {
        wtr.write_record(record.fields())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes `records` to it.
pub fn write_csv(path: &Path, records: &RecordSet) -> Result<(), ScrapeError> {
    let write_err = |source: csv::Error| ScrapeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| write_err(e.into()))?;
    write_records(file, records).map_err(write_err)?;

    info!(path = %path.display(), rows = records.len(), "wrote csv");
    Ok(())
}
