//! Grouping primitives: partition records by a key and reduce each
//! partition to a sum or a count.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::outcome::AggregateError;
use crate::domain::FundingRecord;

/// One labelled value of a breakdown (a bar or a pie slice).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub label: String,
    pub value: f64,
}

impl Share {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Percentage of the breakdown total held by each entry, in input order.
///
/// All zeros when the total is zero.
pub fn percentages(shares: &[Share]) -> Vec<f64> {
    let total: f64 = shares.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        return vec![0.0; shares.len()];
    }
    shares.iter().map(|s| s.value / total * 100.0).collect()
}

/// Sum amounts (missing → 0) per key. Records whose key is `None` are left out.
pub fn sum_by<'a, K, I, F>(records: I, key: F) -> BTreeMap<K, f64>
where
    K: Ord,
    I: IntoIterator<Item = &'a FundingRecord>,
    F: Fn(&'a FundingRecord) -> Option<K>,
{
    let mut groups = BTreeMap::new();
    for r in records {
        if let Some(k) = key(r) {
            *groups.entry(k).or_insert(0.0) += r.amount_or_zero();
        }
    }
    groups
}

/// Count records per key. Records whose key is `None` are left out.
pub fn count_by<'a, K, I, F>(records: I, key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    I: IntoIterator<Item = &'a FundingRecord>,
    F: Fn(&'a FundingRecord) -> Option<K>,
{
    let mut groups = BTreeMap::new();
    for r in records {
        if let Some(k) = key(r) {
            *groups.entry(k).or_insert(0) += 1;
        }
    }
    groups
}

/// Sum of amounts with missing values treated as zero.
pub fn total_amount<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a FundingRecord>,
{
    records.into_iter().map(FundingRecord::amount_or_zero).sum()
}

/// Per-startup funding totals, keyed by startup name.
pub fn startup_totals<'a, I>(records: I) -> BTreeMap<&'a str, f64>
where
    I: IntoIterator<Item = &'a FundingRecord>,
{
    sum_by(records, |r| r.startup.as_deref())
}

/// Per-vertical funding totals as shares, ordered by vertical name.
pub fn sector_shares<'a, I>(records: I) -> Vec<Share>
where
    I: IntoIterator<Item = &'a FundingRecord>,
{
    sum_by(records, |r| r.vertical.as_deref())
        .into_iter()
        .map(|(label, value)| Share::new(label, value))
        .collect()
}

pub(crate) fn ensure_finite(value: f64, metric: &'static str) -> Result<f64, AggregateError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AggregateError::NonFiniteTotal { metric })
    }
}

pub(crate) fn ensure_shares_finite(
    shares: &[Share],
    metric: &'static str,
) -> Result<(), AggregateError> {
    for s in shares {
        ensure_finite(s.value, metric)?;
    }
    Ok(())
}
