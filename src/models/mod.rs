//! Domain models for municipal indicators
//!
//! This module contains the raw record shape as it arrives from the dataset,
//! the normalized row model and the helpers used to address row fields
//! generically.

pub mod example;
pub mod field;
pub mod municipio;
pub mod raw;
pub mod sector;

// Re-export commonly used types
pub use field::{FieldValue, RowField};
pub use municipio::MunicipioRow;
pub use raw::MunicipioRawData;
pub use sector::{Sector, SectorCounts, SectorFigures, SectorTable};
