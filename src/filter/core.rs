//! Core filtering functionality for municipal rows
//!
//! This module defines the `RowFilter` trait and the combinators shared by all
//! criteria.

use std::collections::HashSet;
use std::sync::Arc;

use crate::models::{MunicipioRow, RowField};

/// Trait for objects that decide whether a row is kept
pub trait RowFilter: std::fmt::Debug + Send + Sync {
    /// Whether `row` passes the filter
    fn matches(&self, row: &MunicipioRow) -> bool;

    /// Returns the set of fields read by this filter
    fn required_fields(&self) -> HashSet<RowField>;
}

/// A filter that always includes all rows
#[derive(Debug, Clone, Default)]
pub struct IncludeAllFilter;

impl RowFilter for IncludeAllFilter {
    fn matches(&self, _row: &MunicipioRow) -> bool {
        true
    }

    fn required_fields(&self) -> HashSet<RowField> {
        HashSet::new()
    }
}

/// A filter that combines multiple filters with a logical AND
#[derive(Debug, Clone, Default)]
pub struct AndFilter {
    filters: Vec<Arc<dyn RowFilter>>,
}

impl AndFilter {
    /// Create a new AND filter
    #[must_use]
    pub fn new(filters: Vec<Arc<dyn RowFilter>>) -> Self {
        Self { filters }
    }

    /// Append another criterion
    #[must_use]
    pub fn with(mut self, filter: Arc<dyn RowFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Number of combined criteria
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl RowFilter for AndFilter {
    fn matches(&self, row: &MunicipioRow) -> bool {
        // An empty conjunction keeps everything
        self.filters.iter().all(|filter| filter.matches(row))
    }

    fn required_fields(&self) -> HashSet<RowField> {
        let mut fields = HashSet::new();
        for filter in &self.filters {
            fields.extend(filter.required_fields());
        }
        fields
    }
}

/// Apply a filter to a slice of rows
///
/// # Arguments
/// * `rows` - The rows to filter
/// * `filter` - The filter to apply
///
/// # Returns
/// A new vector holding clones of the kept rows, in input order
pub fn filter_rows(rows: &[MunicipioRow], filter: &dyn RowFilter) -> Vec<MunicipioRow> {
    rows.iter()
        .filter(|row| filter.matches(row))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct HasIdhm;

    impl RowFilter for HasIdhm {
        fn matches(&self, row: &MunicipioRow) -> bool {
            row.idhm.is_some()
        }

        fn required_fields(&self) -> HashSet<RowField> {
            HashSet::from([RowField::Idhm])
        }
    }

    #[test]
    fn test_include_all() {
        let rows = vec![MunicipioRow::default(), MunicipioRow::default()];
        assert_eq!(filter_rows(&rows, &IncludeAllFilter).len(), 2);
        assert!(IncludeAllFilter.required_fields().is_empty());
    }

    #[test]
    fn test_empty_and_keeps_everything() {
        let rows = vec![MunicipioRow::default()];
        let filter = AndFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter_rows(&rows, &filter).len(), 1);
    }

    #[test]
    fn test_and_combines_criteria() {
        let rows = vec![
            MunicipioRow {
                idhm: Some(0.7),
                ..Default::default()
            },
            MunicipioRow::default(),
        ];
        let filter = AndFilter::new(vec![Arc::new(IncludeAllFilter), Arc::new(HasIdhm)]);
        let kept = filter_rows(&rows, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].idhm, Some(0.7));
        assert_eq!(filter.required_fields(), HashSet::from([RowField::Idhm]));
    }
}
