//! Month-over-month trend series.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::group::{count_by, ensure_finite, sum_by};
use super::outcome::{AggregateResult, EmptyReason, Outcome};
use crate::data::DataSet;
use crate::domain::{FundingRecord, YearMonth};

/// What each month's value measures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMode {
    /// Sum of amounts.
    #[default]
    Total,
    /// Number of funding events.
    Count,
}

impl TrendMode {
    pub fn label(&self) -> &'static str {
        match self {
            TrendMode::Total => "Total Investment",
            TrendMode::Count => "Investment Count",
        }
    }
}

impl fmt::Display for TrendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendMode::Total => f.write_str("total"),
            TrendMode::Count => f.write_str("count"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown trend mode '{0}' (expected 'total' or 'count')")]
pub struct ParseTrendModeError(String);

impl FromStr for TrendMode {
    type Err = ParseTrendModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "total" => Ok(TrendMode::Total),
            "count" => Ok(TrendMode::Count),
            _ => Err(ParseTrendModeError(s.to_string())),
        }
    }
}

/// One point of the monthly series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub period: YearMonth,
    /// First day of `period`. Used only for ordering and plotting.
    pub period_start: NaiveDate,
    pub value: f64,
}

/// Group dated records by calendar month and reduce each month by `mode`.
///
/// Records without a date are excluded. Points are ordered by the
/// first-of-month date, so December 2020 precedes January 2021. Returns
/// `Empty` when no record is dated, or in `Total` mode when every month sums
/// to zero.
pub fn monthly_trend(data: &DataSet, mode: TrendMode) -> AggregateResult<Vec<TrendPoint>> {
    // Keyed on the first-of-month date; BTreeMap order is chronological.
    let month_start = |r: &FundingRecord| r.date.and_then(|d| d.with_day(1));
    let groups: BTreeMap<NaiveDate, f64> = match mode {
        TrendMode::Total => sum_by(data, month_start),
        TrendMode::Count => count_by(data, month_start)
            .into_iter()
            .map(|(start, n)| (start, n as f64))
            .collect(),
    };

    if groups.is_empty() {
        return Ok(Outcome::Empty(EmptyReason::NoDatedRecords));
    }

    let mut points = Vec::with_capacity(groups.len());
    for (period_start, value) in groups {
        points.push(TrendPoint {
            period: YearMonth::from_date(period_start),
            period_start,
            value: ensure_finite(value, "monthly total")?,
        });
    }

    if mode == TrendMode::Total && points.iter().all(|p| p.value == 0.0) {
        return Ok(Outcome::Empty(EmptyReason::ZeroTotal));
    }

    Ok(Outcome::Ready(points))
}
