//! Aggregation engine: pure functions from a [`DataSet`](crate::data::DataSet)
//! to metrics, series, and drill-down breakdowns.
//!
//! Nothing here mutates the dataset or holds state between calls: the same
//! input always yields the same output.

pub mod group;
pub mod investor;
pub mod outcome;
pub mod overview;
pub mod startup;
pub mod trend;

use serde::{Deserialize, Serialize};

pub use group::{percentages, Share};
pub use investor::YearTotal;
pub use outcome::{AggregateError, AggregateResult, EmptyReason, Outcome};
pub use trend::{monthly_trend, ParseTrendModeError, TrendMode, TrendPoint};

/// Row limits for drill-down tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillDownLimits {
    /// Rows in "recent investments" tables.
    pub recent: usize,
    /// Entries in "top startups" rankings.
    pub top: usize,
}

impl Default for DrillDownLimits {
    fn default() -> Self {
        Self { recent: 5, top: 5 }
    }
}
