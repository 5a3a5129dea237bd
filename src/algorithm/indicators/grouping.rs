//! Grouped aggregation and chunked processing

use std::collections::BTreeMap;

use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;

use crate::models::{FieldValue, MunicipioRow, RowField};

use super::averages::safe_ratio;

/// Default chunk size for `process_in_chunks`
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Sums and averages of one group
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupAggregate {
    /// Rows in the group
    pub count: usize,
    /// Sum per field over the rows where it is present
    pub sums: BTreeMap<RowField, f64>,
    /// Mean per field over the rows where it is present
    pub averages: BTreeMap<RowField, f64>,
}

/// Group rows by `group_by` and aggregate numeric `fields`
///
/// Rows without a value for `group_by` are skipped. Fields that are absent in
/// every row of a group do not appear in that group's maps.
#[must_use]
pub fn aggregate_by(
    rows: &[MunicipioRow],
    group_by: RowField,
    fields: &[RowField],
) -> BTreeMap<FieldValue, GroupAggregate> {
    let fields: Vec<RowField> = fields
        .iter()
        .copied()
        .filter(|f| f.is_numeric())
        .unique()
        .collect();
    let mut groups: BTreeMap<FieldValue, (GroupAggregate, BTreeMap<RowField, usize>)> =
        BTreeMap::new();

    for row in rows {
        let Some(key) = row.field_value(group_by) else {
            continue;
        };
        let (group, present) = groups.entry(key).or_default();
        group.count += 1;

        for &field in &fields {
            if let Some(value) = row.numeric_value(field) {
                *group.sums.entry(field).or_insert(0.0) += value;
                *present.entry(field).or_insert(0) += 1;
            }
        }
    }

    groups
        .into_iter()
        .map(|(key, (mut group, present))| {
            group.averages = group
                .sums
                .iter()
                .map(|(field, sum)| {
                    let n = present.get(field).copied().unwrap_or(0);
                    (*field, safe_ratio(*sum, n as f64))
                })
                .collect();
            (key, group)
        })
        .collect()
}

/// Distinct values of `field`, sorted, absent values left out
#[must_use]
pub fn unique_values(rows: &[MunicipioRow], field: RowField) -> Vec<FieldValue> {
    rows.iter()
        .filter_map(|row| row.field_value(field))
        .sorted()
        .dedup()
        .collect()
}

/// Run `processor` over consecutive chunks in parallel
///
/// Results are concatenated in input order. A `chunk_size` of 0 is treated
/// as 1.
pub fn process_in_chunks<T, F>(rows: &[MunicipioRow], chunk_size: usize, processor: F) -> Vec<T>
where
    T: Send,
    F: Fn(&[MunicipioRow]) -> Vec<T> + Sync + Send,
{
    rows.par_chunks(chunk_size.max(1))
        .map(|chunk| processor(chunk))
        .collect::<Vec<Vec<T>>>()
        .into_iter()
        .flatten()
        .collect()
}
