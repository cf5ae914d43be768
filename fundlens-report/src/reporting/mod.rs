//! Rendering: Markdown for terminals, JSON and CSV for export.

pub mod export;
pub mod markdown;

pub use export::{
    export_json, export_shares_csv, export_trend_csv, write_file, ReportEnvelope, SCHEMA_VERSION,
};
pub use markdown::MarkdownReportGenerator;
