//! Overall market summary.
//!
//! Each metric is a separate function so a consumer can guard them
//! independently: one failing metric never hides the others.

use super::group::{ensure_finite, startup_totals, total_amount};
use super::outcome::{AggregateError, AggregateResult, EmptyReason, Outcome};
use crate::data::DataSet;

/// Sum of all amounts, missing amounts counted as zero, rounded to the
/// nearest whole unit (halves away from zero).
pub fn total_invested(data: &DataSet) -> AggregateResult<i64> {
    if data.is_empty() {
        return Ok(Outcome::Empty(EmptyReason::NoRecords));
    }
    let total = ensure_finite(total_amount(data), "total invested")?;
    Ok(Outcome::Ready(round_to_whole(total, "total invested")?))
}

/// Largest per-startup total (records grouped by startup, amounts summed).
///
/// When several startups share the maximum the value is the same whichever
/// is picked, so no tie-break is needed.
pub fn max_single_startup_funding(data: &DataSet) -> AggregateResult<f64> {
    if data.is_empty() {
        return Ok(Outcome::Empty(EmptyReason::NoRecords));
    }
    let totals = startup_totals(data);
    let max = totals
        .values()
        .copied()
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
        .ok_or(AggregateError::NoStartups)?;
    Ok(Outcome::Ready(ensure_finite(max, "max single startup funding")?))
}

/// Mean over distinct startups of each startup's total funding, rounded to
/// the nearest whole unit. Not the mean of individual records.
pub fn average_ticket_size(data: &DataSet) -> AggregateResult<i64> {
    if data.is_empty() {
        return Ok(Outcome::Empty(EmptyReason::NoRecords));
    }
    let totals = startup_totals(data);
    if totals.is_empty() {
        return Err(AggregateError::NoStartups);
    }
    let sum: f64 = totals.values().sum();
    let mean = ensure_finite(sum / totals.len() as f64, "average ticket size")?;
    Ok(Outcome::Ready(round_to_whole(mean, "average ticket size")?))
}

/// Count of distinct non-null startup names.
pub fn funded_startup_count(data: &DataSet) -> Outcome<usize> {
    if data.is_empty() {
        return Outcome::Empty(EmptyReason::NoRecords);
    }
    Outcome::Ready(startup_totals(data).len())
}

/// Round half away from zero into `i64`. Values past the `i64` range are
/// rejected rather than saturated.
fn round_to_whole(value: f64, metric: &'static str) -> Result<i64, AggregateError> {
    // 2^63 is exactly representable; i64::MAX is not.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let rounded = value.round();
    if (-LIMIT..LIMIT).contains(&rounded) {
        Ok(rounded as i64)
    } else {
        Err(AggregateError::OutOfRange { metric })
    }
}
