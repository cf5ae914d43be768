//! CSV ingestion and normalization.
//!
//! Turns a funding CSV into a [`DataSet`]. Per-row problems are recovered
//! locally: unparsable dates and amounts become `None`, rows the CSV reader
//! cannot decode are skipped. Only an unreadable source fails the load.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::dataset::DataSet;
use super::parse::{parse_amount, parse_date, parse_text};
use super::schema::{ColumnIndex, FundingSchema, SchemaError};
use crate::domain::FundingRecord;

/// Errors that make a source unusable as a funding table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read CSV header: {0}")]
    Header(#[source] csv::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("failed to read CSV: {0}")]
    Read(#[source] csv::Error),
}

/// What happened during a load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Data rows encountered, including skipped ones.
    pub rows_read: usize,
    pub rows_kept: usize,
    /// Rows the CSV reader could not decode (e.g. invalid UTF-8).
    pub rows_skipped: usize,
    /// Source line where each skipped row starts, when the reader knows it.
    /// Quoted fields may span lines, so this is not the row index.
    pub skipped_lines: Vec<u64>,
    pub null_dates: usize,
    pub null_amounts: usize,
}

/// Result of a load: the dataset plus a report of recovered problems.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub dataset: DataSet,
    pub report: LoadReport,
}

/// Load a funding CSV from disk.
pub fn load_csv_path(path: impl AsRef<Path>) -> Result<LoadedData, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "loading funding data");
    load_csv_reader(file)
}

/// Load a funding CSV from any reader. The first row must be a header.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<LoadedData, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    let columns = FundingSchema::resolve(&headers)?;

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for row in reader.records() {
        report.rows_read += 1;
        let row = match row {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(LoadError::Read(e)),
            Err(e) => {
                let line = e.position().map(csv::Position::line);
                debug!(line = ?line, error = %e, "skipping undecodable row");
                report.rows_skipped += 1;
                report.skipped_lines.extend(line);
                continue;
            }
        };

        let record = normalize_row(&row, &columns);
        if record.date.is_none() {
            report.null_dates += 1;
        }
        if record.amount.is_none() {
            report.null_amounts += 1;
        }
        records.push(record);
    }

    report.rows_kept = records.len();

    if report.rows_skipped > 0 {
        warn!(skipped = report.rows_skipped, "some rows could not be decoded");
    }
    info!(
        rows = report.rows_kept,
        null_dates = report.null_dates,
        null_amounts = report.null_amounts,
        "funding data loaded"
    );

    Ok(LoadedData {
        dataset: DataSet::from_records(records),
        report,
    })
}

fn normalize_row(row: &StringRecord, columns: &ColumnIndex) -> FundingRecord {
    let cell = |idx: usize| row.get(idx);

    FundingRecord {
        date: cell(columns.date).and_then(parse_date),
        startup: parse_text(cell(columns.startup)),
        investors: parse_text(cell(columns.investors)),
        vertical: parse_text(cell(columns.vertical)),
        city: parse_text(cell(columns.city)),
        round: parse_text(cell(columns.round)),
        amount: cell(columns.amount).and_then(parse_amount),
    }
}
