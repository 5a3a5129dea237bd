//! Individual filter criteria
//!
//! Each criterion implements `RowFilter`. Identity criteria exclude rows whose
//! field is absent; range criteria let rows with an absent value through.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::MunicipalDataError;
use crate::models::{MunicipioRow, RowField};

use super::core::RowFilter;

/// Values that select "everything" in the dashboard selectors
pub const ALL_SENTINELS: [&str; 2] = ["todos", "all"];

/// Whether a selector value means "no restriction"
#[must_use]
pub fn is_all_sentinel(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || ALL_SENTINELS.iter().any(|s| value.eq_ignore_ascii_case(s))
}

/// Year selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YearSelection {
    /// Every year
    #[default]
    All,
    /// A single year
    Year(i32),
}

impl FromStr for YearSelection {
    type Err = MunicipalDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_all_sentinel(s) {
            return Ok(Self::All);
        }
        s.trim()
            .parse::<i32>()
            .map(Self::Year)
            .map_err(|_| MunicipalDataError::InvalidFilter {
                field: "ano",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for YearSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("todos"),
            Self::Year(year) => write!(f, "{year}"),
        }
    }
}

/// Keeps rows of one year; rows without a year are excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearFilter {
    pub year: i32,
}

impl RowFilter for YearFilter {
    fn matches(&self, row: &MunicipioRow) -> bool {
        row.year == Some(self.year)
    }

    fn required_fields(&self) -> HashSet<RowField> {
        HashSet::from([RowField::Year])
    }
}

/// Keeps rows of one state, compared against the state's full name
///
/// The dashboard's state selector is named after the state code but is fed
/// with and compared to `state_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateNameFilter {
    pub state_name: String,
}

impl RowFilter for StateNameFilter {
    fn matches(&self, row: &MunicipioRow) -> bool {
        row.state_name.as_deref() == Some(self.state_name.as_str())
    }

    fn required_fields(&self) -> HashSet<RowField> {
        HashSet::from([RowField::StateName])
    }
}

/// Keeps rows whose municipality name matches exactly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MunicipalityFilter {
    pub municipality: String,
}

impl RowFilter for MunicipalityFilter {
    fn matches(&self, row: &MunicipioRow) -> bool {
        row.municipality.as_deref() == Some(self.municipality.as_str())
    }

    fn required_fields(&self) -> HashSet<RowField> {
        HashSet::from([RowField::Municipality])
    }
}

/// Inclusive range over a numeric field; absent values pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter {
    pub field: RowField,
    pub min: f64,
    pub max: f64,
}

impl RangeFilter {
    #[must_use]
    pub const fn new(field: RowField, (min, max): (f64, f64)) -> Self {
        Self { field, min, max }
    }
}

impl RowFilter for RangeFilter {
    fn matches(&self, row: &MunicipioRow) -> bool {
        match row.numeric_value(self.field) {
            Some(value) => value >= self.min && value <= self.max,
            None => true,
        }
    }

    fn required_fields(&self) -> HashSet<RowField> {
        HashSet::from([self.field])
    }
}
