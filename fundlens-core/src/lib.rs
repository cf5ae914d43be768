//! FundLens Core: funding dataset loading and aggregation.
//!
//! This crate contains:
//! - Domain types (funding records, year-month periods)
//! - CSV ingestion with best-effort normalization of dates and amounts
//! - The read-only `DataSet`
//! - Aggregations: overall summary, month-over-month trend, startup and
//!   investor drill-downs, each returning a value or an explicit empty signal

pub mod aggregate;
pub mod data;
pub mod domain;

pub use aggregate::{
    AggregateError, AggregateResult, DrillDownLimits, EmptyReason, Outcome, TrendMode,
};
pub use data::{load_csv_path, load_csv_reader, DataSet, LoadError, LoadReport, LoadedData};
pub use domain::{FundingRecord, InvestmentRow, YearMonth};
