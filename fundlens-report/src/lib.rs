//! FundLens Report: views, configuration, and rendering.
//!
//! This crate builds on `fundlens-core` to provide:
//! - TOML report configuration with validation
//! - Guarded panels, so one failed aggregation never hides its siblings
//! - Overview, startup and investor views over a loaded dataset
//! - Markdown rendering plus JSON/CSV export

pub mod config;
pub mod panel;
pub mod reporting;
pub mod views;

pub use config::{ConfigError, ReportConfig};
pub use panel::Panel;
pub use reporting::{
    export_json, export_shares_csv, export_trend_csv, write_file, MarkdownReportGenerator,
    ReportEnvelope, SCHEMA_VERSION,
};
pub use views::{
    Dashboard, EntityKind, EntityList, InvestorPanels, InvestorView, OverviewView, StartupPanels,
    StartupView,
};
