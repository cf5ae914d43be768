//! FundingRecord: one funding event row.

use super::period::YearMonth;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single funding event as loaded from the source table.
///
/// Every field except `startup` is nullable at the source; `startup` is
/// nullable too when the cell was blank. Amounts are in Crore INR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingRecord {
    pub date: Option<NaiveDate>,
    pub startup: Option<String>,
    /// Raw comma-delimited investor list, exactly as it appeared in the source.
    pub investors: Option<String>,
    pub vertical: Option<String>,
    pub city: Option<String>,
    pub round: Option<String>,
    pub amount: Option<f64>,
}

impl FundingRecord {
    /// Amount with missing values treated as zero.
    pub fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }

    /// Calendar month 1..=12, `None` when the date is unknown.
    pub fn month(&self) -> Option<u32> {
        self.date.map(|d| d.month())
    }

    /// Calendar year, `None` when the date is unknown.
    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }

    pub fn period(&self) -> Option<YearMonth> {
        self.date.map(YearMonth::from_date)
    }

    /// Case-sensitive substring test against the raw investor list.
    ///
    /// Substring matching over-matches when one investor's name is contained
    /// in another's ("Accel" matches "Accel India"). That is the accepted
    /// membership rule; do not tighten it to exact token equality.
    pub fn lists_investor(&self, investor: &str) -> bool {
        self.investors
            .as_deref()
            .is_some_and(|raw| raw.contains(investor))
    }

    /// Individual investor names: the raw list split on commas, trimmed,
    /// blanks dropped.
    pub fn investor_names(&self) -> impl Iterator<Item = &str> {
        self.investors
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Projection used by investor drill-down tables.
    pub fn to_investment_row(&self) -> InvestmentRow {
        InvestmentRow {
            date: self.date,
            startup: self.startup.clone(),
            vertical: self.vertical.clone(),
            city: self.city.clone(),
            round: self.round.clone(),
            amount: self.amount,
        }
    }
}

/// (`date`, `startup`, `vertical`, `city`, `round`, `amount`) projection of a
/// [`FundingRecord`]; the investor list is omitted because the row is already
/// scoped to one investor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRow {
    pub date: Option<NaiveDate>,
    pub startup: Option<String>,
    pub vertical: Option<String>,
    pub city: Option<String>,
    pub round: Option<String>,
    pub amount: Option<f64>,
}
