//! Row filtering
//!
//! Filters select subsets of the loaded rows for a page. Criteria implement
//! the `RowFilter` trait and are combined with `AndFilter`; `FilterOptions`
//! is the page-level parameter set that builds the combination.

pub mod core;
pub mod criteria;
pub mod options;

pub use self::core::{AndFilter, IncludeAllFilter, RowFilter, filter_rows};
pub use criteria::{
    MunicipalityFilter, RangeFilter, StateNameFilter, YearFilter, YearSelection, is_all_sentinel,
};
pub use options::FilterOptions;
