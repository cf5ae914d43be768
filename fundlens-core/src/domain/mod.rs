//! Domain types for FundLens

pub mod period;
pub mod record;

pub use period::YearMonth;
pub use record::{FundingRecord, InvestmentRow};
