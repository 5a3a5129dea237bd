//! A Rust library for loading Brazilian municipal indicator data and
//! computing the aggregates, rankings and chart series a dashboard needs.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod reader;
pub mod source;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::LoaderConfig;
pub use error::{MunicipalDataError, Result};
pub use loader::{DataOrigin, Dataset, LoadStatus, MunicipalDataLoader};
pub use source::{DataSource, FileSource, StaticSource};

// Data model
pub use models::{FieldValue, MunicipioRawData, MunicipioRow, RowField, Sector};

// Parsing
pub use reader::{ParsedRecords, parse_records};

// Filtering capabilities
pub use filter::{FilterOptions, RowFilter, YearSelection};

// Analysis
pub use algorithm::DataAnalyzer;
pub use algorithm::indicators::{ChartData, ChartKind};
