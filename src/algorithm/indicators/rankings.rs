//! Top-N municipality rankings
//!
//! Rankings sort descending with a stable sort, so equal values keep their
//! input order. Positions are 1-based.

use itertools::Itertools;
use serde::Serialize;

use crate::models::MunicipioRow;

/// Default number of entries in a ranking
pub const DEFAULT_RANKING_LIMIT: usize = 10;

/// A municipality ranked by a single indicator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedIndicator {
    pub position: usize,
    pub municipality: String,
    pub state_code: String,
    pub value: f64,
    pub population: f64,
}

/// A municipality ranked by health staff coverage
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCoverage {
    pub position: usize,
    pub municipality: String,
    pub state_code: String,
    pub population: f64,
    pub doctors_per_1000: f64,
    pub nurses_per_1000: f64,
    /// Doctors plus nurses per 1,000 inhabitants
    pub coverage: f64,
}

/// Rank rows by an optional indicator, skipping rows where it is absent
pub fn top_by<F>(rows: &[MunicipioRow], limit: usize, indicator: F) -> Vec<RankedIndicator>
where
    F: Fn(&MunicipioRow) -> Option<f64>,
{
    rows.iter()
        .filter_map(|row| indicator(row).map(|value| (row, value)))
        .sorted_by(|(_, a), (_, b)| b.total_cmp(a))
        .take(limit)
        .enumerate()
        .map(|(index, (row, value))| RankedIndicator {
            position: index + 1,
            municipality: row.municipality_or_na(),
            state_code: row.state_code_or_na(),
            value,
            population: row.population.unwrap_or(0.0),
        })
        .collect()
}

/// Municipalities with the highest HDI
#[must_use]
pub fn top_by_idhm(rows: &[MunicipioRow], limit: usize) -> Vec<RankedIndicator> {
    top_by(rows, limit, |row| row.idhm)
}

/// Municipalities with the highest IDEB
///
/// IDEB is not part of the current dataset, so this is empty until it is.
#[must_use]
pub fn top_by_ideb(rows: &[MunicipioRow], limit: usize) -> Vec<RankedIndicator> {
    top_by(rows, limit, |row| row.ideb)
}

/// Municipalities with the most doctors and nurses per 1,000 inhabitants
///
/// Only rows with a positive population take part.
#[must_use]
pub fn top_by_health_coverage(rows: &[MunicipioRow], limit: usize) -> Vec<RankedCoverage> {
    rows.iter()
        .filter_map(|row| {
            let population = row.positive_population()?;
            Some(RankedCoverage {
                position: 0,
                municipality: row.municipality_or_na(),
                state_code: row.state_code_or_na(),
                population,
                doctors_per_1000: row.doctors.unwrap_or(0.0) / population * 1000.0,
                nurses_per_1000: row.nurses.unwrap_or(0.0) / population * 1000.0,
                coverage: row.coverage_per_1000()?,
            })
        })
        .sorted_by(|a, b| b.coverage.total_cmp(&a.coverage))
        .take(limit)
        .enumerate()
        .map(|(index, entry)| RankedCoverage {
            position: index + 1,
            ..entry
        })
        .collect()
}
