//! Dashboard filter options
//!
//! `FilterOptions` carries the parameters a page passes when asking for a
//! subset of the dataset. All criteria combine with AND.

use std::sync::Arc;

use crate::models::{MunicipioRow, RowField};

use super::core::{AndFilter, RowFilter, filter_rows};
use super::criteria::{
    MunicipalityFilter, RangeFilter, StateNameFilter, YearFilter, YearSelection, is_all_sentinel,
};

/// Filter parameters for `get_filtered_data`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    /// Year to keep; `All` bypasses
    pub year: YearSelection,
    /// State to keep, matched against the state's full name
    pub state: Option<String>,
    /// Municipality name to keep
    pub municipality: Option<String>,
    /// Inclusive HDI range; rows without HDI pass
    pub idhm_range: Option<(f64, f64)>,
    /// Inclusive population range; rows without population pass
    pub population_range: Option<(f64, f64)>,
}

impl FilterOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_year(mut self, year: YearSelection) -> Self {
        self.year = year;
        self
    }

    /// Restrict to a state by full name; `"todos"` clears the restriction
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = selection(state.into());
        self
    }

    /// Restrict to a municipality; `"todos"` clears the restriction
    #[must_use]
    pub fn with_municipality(mut self, municipality: impl Into<String>) -> Self {
        self.municipality = selection(municipality.into());
        self
    }

    #[must_use]
    pub const fn with_idhm_range(mut self, min: f64, max: f64) -> Self {
        self.idhm_range = Some((min, max));
        self
    }

    #[must_use]
    pub const fn with_population_range(mut self, min: f64, max: f64) -> Self {
        self.population_range = Some((min, max));
        self
    }

    /// Compose the active criteria into a single filter
    #[must_use]
    pub fn build(&self) -> AndFilter {
        let mut filter = AndFilter::default();

        if let YearSelection::Year(year) = self.year {
            filter = filter.with(Arc::new(YearFilter { year }));
        }

        if let Some(state_name) = self.state.as_ref().filter(|s| !is_all_sentinel(s)) {
            filter = filter.with(Arc::new(StateNameFilter {
                state_name: state_name.clone(),
            }));
        }

        if let Some(municipality) = self.municipality.as_ref().filter(|m| !is_all_sentinel(m)) {
            filter = filter.with(Arc::new(MunicipalityFilter {
                municipality: municipality.clone(),
            }));
        }

        if let Some(range) = self.idhm_range {
            filter = filter.with(Arc::new(RangeFilter::new(RowField::Idhm, range)));
        }

        if let Some(range) = self.population_range {
            filter = filter.with(Arc::new(RangeFilter::new(RowField::Population, range)));
        }

        filter
    }

    /// Whether no criterion is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.build().is_empty()
    }

    /// Apply the options to `rows`
    #[must_use]
    pub fn apply(&self, rows: &[MunicipioRow]) -> Vec<MunicipioRow> {
        filter_rows(rows, &self.build())
    }

    /// Whether a single row passes
    #[must_use]
    pub fn matches(&self, row: &MunicipioRow) -> bool {
        self.build().matches(row)
    }
}

fn selection(value: String) -> Option<String> {
    (!is_all_sentinel(&value)).then_some(value)
}
