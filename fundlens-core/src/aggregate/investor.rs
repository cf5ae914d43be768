//! Investor drill-down.
//!
//! A record belongs to an investor when its raw investor list contains the
//! investor's name as a case-sensitive substring. This over-matches names
//! that are substrings of other names; that behavior is kept as-is.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::group::{
    ensure_finite, ensure_shares_finite, sector_shares, startup_totals, sum_by, total_amount,
    Share,
};
use super::outcome::{AggregateResult, EmptyReason, Outcome};
use crate::data::DataSet;
use crate::domain::{FundingRecord, InvestmentRow};

/// Amount invested in one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearTotal {
    pub year: i32,
    pub value: f64,
}

/// Records listing `investor`, in dataset order.
pub fn investor_records<'a>(data: &'a DataSet, investor: &str) -> Vec<&'a FundingRecord> {
    data.iter().filter(|r| r.lists_investor(investor)).collect()
}

/// Sum of matched amounts; `Empty(InvestorNotFound)` when nothing matched.
pub fn total_invested(records: &[&FundingRecord]) -> AggregateResult<f64> {
    if records.is_empty() {
        return Ok(Outcome::Empty(EmptyReason::InvestorNotFound));
    }
    let total = ensure_finite(total_amount(records.iter().copied()), "investor total")?;
    Ok(Outcome::Ready(total))
}

/// The first `limit` matches in dataset order, projected for display.
pub fn recent_investments(records: &[&FundingRecord], limit: usize) -> Vec<InvestmentRow> {
    records
        .iter()
        .take(limit)
        .map(|r| r.to_investment_row())
        .collect()
}

/// Startups ranked by amount received from this investor, largest first,
/// truncated to `limit`. Equal amounts are ordered by name.
pub fn top_startups(records: &[&FundingRecord], limit: usize) -> AggregateResult<Vec<Share>> {
    let mut shares: Vec<Share> = startup_totals(records.iter().copied())
        .into_iter()
        .map(|(name, value)| Share::new(name, value))
        .collect();
    ensure_shares_finite(&shares, "startup total")?;

    shares.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });
    shares.truncate(limit);

    Ok(Outcome::non_empty(shares, EmptyReason::NoStartupData))
}

/// Funding per vertical; `Empty(NoSectorData)` when no match has a vertical.
pub fn sector_breakdown(records: &[&FundingRecord]) -> AggregateResult<Vec<Share>> {
    let shares = sector_shares(records.iter().copied());
    ensure_shares_finite(&shares, "sector total")?;
    Ok(Outcome::non_empty(shares, EmptyReason::NoSectorData))
}

/// Funding per calendar year, ascending. Undated matches are excluded.
pub fn year_over_year(records: &[&FundingRecord]) -> AggregateResult<Vec<YearTotal>> {
    let mut years = Vec::new();
    for (year, value) in sum_by(records.iter().copied(), |r| r.year()) {
        years.push(YearTotal {
            year,
            value: ensure_finite(value, "yearly total")?,
        });
    }
    Ok(Outcome::non_empty(years, EmptyReason::NoYearData))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::AggregateError;
    use chrono::NaiveDate;

    fn rec(
        date: Option<(i32, u32, u32)>,
        startup: &str,
        investors: &str,
        vertical: Option<&str>,
        amount: Option<f64>,
    ) -> FundingRecord {
        FundingRecord {
            date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            startup: Some(startup.into()),
            investors: Some(investors.into()),
            vertical: vertical.map(Into::into),
            city: Some("Mumbai".into()),
            round: Some("Seed".into()),
            amount,
        }
    }

    #[test]
    fn substring_membership() {
        let data = DataSet::from_records(vec![rec(
            Some((2019, 1, 1)),
            "A",
            "Accel, Sequoia",
            Some("Tech"),
            Some(1.0),
        )]);
        assert_eq!(investor_records(&data, "Accel").len(), 1);
        assert_eq!(investor_records(&data, "Sequoia").len(), 1);
        assert!(investor_records(&data, "Tiger").is_empty());
    }

    #[test]
    fn unknown_investor_is_not_found() {
        let data = DataSet::from_records(vec![rec(None, "A", "X", None, Some(1.0))]);
        let records = investor_records(&data, "Nobody");
        assert!(records.is_empty());
        assert_eq!(
            total_invested(&records),
            Ok(Outcome::Empty(EmptyReason::InvestorNotFound))
        );
    }

    #[test]
    fn top_startups_descending_and_truncated() {
        let records: Vec<FundingRecord> = (0..7)
            .map(|i| rec(None, &format!("S{i}"), "X", None, Some(i as f64)))
            .collect();
        let data = DataSet::from_records(records);
        let top = top_startups(&investor_records(&data, "X"), 5)
            .unwrap()
            .into_ready()
            .unwrap();
        let labels: Vec<&str> = top.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["S6", "S5", "S4", "S3", "S2"]);
    }

    #[test]
    fn top_startups_sum_per_startup() {
        let data = DataSet::from_records(vec![
            rec(None, "A", "X", None, Some(3.0)),
            rec(None, "B", "X", None, Some(4.0)),
            rec(None, "A", "X", None, Some(2.0)),
        ]);
        let top = top_startups(&investor_records(&data, "X"), 5)
            .unwrap()
            .into_ready()
            .unwrap();
        assert_eq!(top, vec![Share::new("A", 5.0), Share::new("B", 4.0)]);
    }

    #[test]
    fn breakdowns_are_independent() {
        // No verticals at all, but dated: sector empty, YoY present.
        let data = DataSet::from_records(vec![
            rec(Some((2018, 5, 1)), "A", "X", None, Some(3.0)),
            rec(Some((2019, 5, 1)), "B", "X", None, Some(4.0)),
        ]);
        let records = investor_records(&data, "X");
        assert_eq!(
            sector_breakdown(&records),
            Ok(Outcome::Empty(EmptyReason::NoSectorData))
        );
        assert_eq!(
            year_over_year(&records),
            Ok(Outcome::Ready(vec![
                YearTotal { year: 2018, value: 3.0 },
                YearTotal { year: 2019, value: 4.0 },
            ]))
        );
        assert!(top_startups(&records, 5).unwrap().is_ready());
    }

    #[test]
    fn undated_matches_leave_yoy_empty_but_sectors_intact() {
        let data = DataSet::from_records(vec![rec(None, "A", "X", Some("Tech"), Some(3.0))]);
        let records = investor_records(&data, "X");
        assert_eq!(
            year_over_year(&records),
            Ok(Outcome::Empty(EmptyReason::NoYearData))
        );
        assert_eq!(
            sector_breakdown(&records),
            Ok(Outcome::Ready(vec![Share::new("Tech", 3.0)]))
        );
    }

    #[test]
    fn year_over_year_is_ascending() {
        let data = DataSet::from_records(vec![
            rec(Some((2020, 1, 1)), "A", "X", None, Some(1.0)),
            rec(Some((2017, 1, 1)), "B", "X", None, Some(2.0)),
            rec(Some((2020, 6, 1)), "C", "X", None, None),
        ]);
        let years: Vec<i32> = year_over_year(&investor_records(&data, "X"))
            .unwrap()
            .into_ready()
            .unwrap()
            .iter()
            .map(|y| y.year)
            .collect();
        assert_eq!(years, vec![2017, 2020]);
    }

    #[test]
    fn recent_investments_are_projected_in_dataset_order() {
        let data = DataSet::from_records(
            (1..=6)
                .map(|d| rec(Some((2019, 1, d)), &format!("S{d}"), "X", None, Some(1.0)))
                .collect(),
        );
        let records = investor_records(&data, "X");
        let recent = recent_investments(&records, 5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].startup.as_deref(), Some("S1"));
        assert_eq!(recent[4].city.as_deref(), Some("Mumbai"));
        assert_eq!(records.len(), 6);
        assert_eq!(total_invested(&records), Ok(Outcome::Ready(6.0)));
    }

    #[test]
    fn overflowing_total_leaves_breakdowns_intact() {
        // Two maximal amounts overflow the investor total; neither the
        // year series (one dated record) nor the per-startup and per-sector
        // sums overflow.
        let data = DataSet::from_records(vec![
            rec(Some((2019, 4, 1)), "S1", "X", Some("V1"), Some(f64::MAX)),
            rec(None, "S2", "X", Some("V2"), Some(f64::MAX)),
        ]);
        let records = investor_records(&data, "X");
        assert_eq!(
            total_invested(&records),
            Err(AggregateError::NonFiniteTotal { metric: "investor total" })
        );
        assert_eq!(
            year_over_year(&records),
            Ok(Outcome::Ready(vec![YearTotal { year: 2019, value: f64::MAX }]))
        );
        assert_eq!(
            sector_breakdown(&records),
            Ok(Outcome::Ready(vec![
                Share::new("V1", f64::MAX),
                Share::new("V2", f64::MAX),
            ]))
        );
        assert!(top_startups(&records, 5).unwrap().is_ready());
    }
}
