//! Data loading and normalization

pub mod dataset;
pub mod ingest;
pub mod parse;
pub mod schema;

pub use dataset::DataSet;
pub use ingest::{load_csv_path, load_csv_reader, LoadError, LoadReport, LoadedData};
pub use schema::{ColumnIndex, FundingSchema, SchemaError};
