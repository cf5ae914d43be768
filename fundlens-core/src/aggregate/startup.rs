//! Startup drill-down.

use super::group::{ensure_finite, ensure_shares_finite, sector_shares, total_amount, Share};
use super::outcome::{AggregateResult, EmptyReason, Outcome};
use crate::data::DataSet;
use crate::domain::FundingRecord;

/// Records whose startup equals `name` exactly, in dataset order.
pub fn startup_records<'a>(data: &'a DataSet, name: &str) -> Vec<&'a FundingRecord> {
    data.iter()
        .filter(|r| r.startup.as_deref() == Some(name))
        .collect()
}

/// The first `limit` records in dataset order.
///
/// "Recent" follows the source's row order; callers that need chronological
/// recency must sort the records themselves.
pub fn recent_investments(records: &[&FundingRecord], limit: usize) -> Vec<FundingRecord> {
    records.iter().take(limit).map(|r| (*r).clone()).collect()
}

pub fn total_funding(records: &[&FundingRecord]) -> AggregateResult<f64> {
    if records.is_empty() {
        return Ok(Outcome::Empty(EmptyReason::StartupNotFound));
    }
    let total = ensure_finite(total_amount(records.iter().copied()), "startup total funding")?;
    Ok(Outcome::Ready(total))
}

/// Funding per vertical; `Empty(NoSectorData)` when no record has a vertical.
pub fn sector_breakdown(records: &[&FundingRecord]) -> AggregateResult<Vec<Share>> {
    let shares = sector_shares(records.iter().copied());
    ensure_shares_finite(&shares, "sector total")?;
    Ok(Outcome::non_empty(shares, EmptyReason::NoSectorData))
}

/// Distinct round labels in first-seen order.
pub fn rounds(records: &[&FundingRecord]) -> Vec<String> {
    distinct_in_order(records.iter().filter_map(|r| r.round.as_deref()))
}

/// Distinct investor names across the records, in first-seen order.
pub fn backers(records: &[&FundingRecord]) -> Vec<String> {
    distinct_in_order(records.iter().flat_map(|r| r.investor_names()))
}

fn distinct_in_order<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if !out.iter().any(|seen| seen == v) {
            out.push(v.to_string());
        }
    }
    out
}
