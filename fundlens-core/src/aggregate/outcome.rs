//! Outcome and error types shared by every aggregation.
//!
//! An aggregation has three possible results:
//! - `Ok(Outcome::Ready(v))`: a computed value, possibly zero
//! - `Ok(Outcome::Empty(reason))`: nothing to compute over; render "no data"
//! - `Err(AggregateError)`: the data had an unexpected shape
//!
//! Keeping `Empty` apart from a zero-valued `Ready` lets a consumer choose
//! between showing "0" and showing a neutral empty state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Outcome<T> {
    Ready(T),
    Empty(EmptyReason),
}

impl<T> Outcome<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Outcome::Ready(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Outcome::Ready(v) => Some(v),
            Outcome::Empty(_) => None,
        }
    }

    pub fn into_ready(self) -> Option<T> {
        match self {
            Outcome::Ready(v) => Some(v),
            Outcome::Empty(_) => None,
        }
    }

    pub fn empty_reason(&self) -> Option<EmptyReason> {
        match self {
            Outcome::Ready(_) => None,
            Outcome::Empty(reason) => Some(*reason),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Ready(v) => Outcome::Ready(f(v)),
            Outcome::Empty(reason) => Outcome::Empty(reason),
        }
    }
}

impl<T> Outcome<Vec<T>> {
    /// `Ready(items)` when there is at least one item, otherwise `Empty(reason)`.
    pub fn non_empty(items: Vec<T>, reason: EmptyReason) -> Self {
        if items.is_empty() {
            Outcome::Empty(reason)
        } else {
            Outcome::Ready(items)
        }
    }
}

/// Why there is nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    /// The dataset has no records at all.
    NoRecords,
    /// No record carries a usable date.
    NoDatedRecords,
    /// Every dated month sums to zero.
    ZeroTotal,
    StartupNotFound,
    InvestorNotFound,
    NoSectorData,
    NoStartupData,
    NoYearData,
}

impl EmptyReason {
    /// Short user-facing explanation.
    pub fn message(&self) -> &'static str {
        match self {
            EmptyReason::NoRecords => "No funding records loaded",
            EmptyReason::NoDatedRecords => "No dated records available",
            EmptyReason::ZeroTotal => "No funding amounts recorded for this period",
            EmptyReason::StartupNotFound => "Startup not found",
            EmptyReason::InvestorNotFound => "No investments found for this investor",
            EmptyReason::NoSectorData => "No sector data",
            EmptyReason::NoStartupData => "No startup data",
            EmptyReason::NoYearData => "No dated investments",
        }
    }
}

/// The data had a shape an aggregation could not handle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AggregateError {
    #[error("records exist but none names a startup")]
    NoStartups,

    #[error("{metric} is not a finite number")]
    NonFiniteTotal { metric: &'static str },

    #[error("{metric} does not fit in a whole-number total")]
    OutOfRange { metric: &'static str },
}

/// Convenience alias for every aggregation's return type.
pub type AggregateResult<T> = Result<Outcome<T>, AggregateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_switches_on_length() {
        assert_eq!(
            Outcome::<Vec<u8>>::non_empty(vec![], EmptyReason::NoSectorData),
            Outcome::Empty(EmptyReason::NoSectorData)
        );
        assert_eq!(
            Outcome::non_empty(vec![1], EmptyReason::NoSectorData),
            Outcome::Ready(vec![1])
        );
    }

    #[test]
    fn zero_is_not_empty() {
        let zero: Outcome<f64> = Outcome::Ready(0.0);
        assert!(zero.is_ready());
        assert_eq!(zero.empty_reason(), None);
    }

    #[test]
    fn map_preserves_empty_reason() {
        let o: Outcome<i32> = Outcome::Empty(EmptyReason::NoRecords);
        assert_eq!(o.map(|v| v * 2), Outcome::Empty(EmptyReason::NoRecords));
    }

    #[test]
    fn serialized_status_distinguishes_empty_from_zero() {
        let zero = serde_json::to_value(Outcome::Ready(0.0)).unwrap();
        let empty = serde_json::to_value(Outcome::<f64>::Empty(EmptyReason::NoRecords)).unwrap();
        assert_eq!(zero["status"], "ready");
        assert_eq!(zero["data"], 0.0);
        assert_eq!(empty["status"], "empty");
        assert_eq!(empty["data"], "no_records");
    }
}
