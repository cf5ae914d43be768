//! JSON and CSV export.
//!
//! JSON output wraps a view in a [`ReportEnvelope`] carrying the schema
//! version and the dataset fingerprint, so two exports can be compared
//! without re-reading the source CSV. CSV output covers the chart-shaped
//! series (monthly trend, share breakdowns).

use std::path::Path;

use anyhow::{Context, Result};
use fundlens_core::aggregate::{Share, TrendPoint};
use fundlens_core::DataSet;
use serde::Serialize;
use tracing::info;

/// Bumped whenever the JSON layout of a view changes.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct ReportEnvelope<'a, V: Serialize> {
    pub schema_version: u32,
    pub dataset_fingerprint: String,
    pub record_count: usize,
    pub view: &'a V,
}

impl<'a, V: Serialize> ReportEnvelope<'a, V> {
    pub fn new(data: &DataSet, view: &'a V) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            dataset_fingerprint: data.fingerprint(),
            record_count: data.len(),
            view,
        }
    }
}

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize a view, wrapped in its envelope, to pretty JSON.
pub fn export_json<V: Serialize>(data: &DataSet, view: &V) -> Result<String> {
    serde_json::to_string_pretty(&ReportEnvelope::new(data, view))
        .context("failed to serialize report to JSON")
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Columns: period, period_start, value
pub fn export_trend_csv(points: &[TrendPoint]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["period", "period_start", "value"])?;
    for p in points {
        wtr.write_record([
            &p.period.to_string(),
            &p.period_start.to_string(),
            &format!("{:.2}", p.value),
        ])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Columns: label, value
pub fn export_shares_csv(shares: &[Share]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["label", "value"])?;
    for s in shares {
        wtr.write_record([s.label.as_str(), &format!("{:.2}", s.value)])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Write rendered output to `path`, creating parent directories.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote export");
    Ok(())
}
