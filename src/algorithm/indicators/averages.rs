//! Averages and derived ratios
//!
//! HDI averages only count rows where the dimension is present. Ratios divide
//! totals by totals and return 0 when the denominator is not positive.

use serde::Serialize;

use crate::models::MunicipioRow;

use super::totals::calculate_totals;

/// Averages over a set of rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedAverages {
    pub idhm: f64,
    pub idhm_income: f64,
    pub idhm_education: f64,
    pub idhm_longevity: f64,
    /// Students per teacher
    pub students_per_teacher: f64,
    pub doctors_per_1000: f64,
    pub nurses_per_1000: f64,
    pub businesses_per_municipality: f64,
    /// Health spend per inhabitant
    pub spend_per_capita: f64,
}

/// Divide, returning 0 unless the denominator is positive
#[must_use]
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        let ratio = numerator / denominator;
        if ratio.is_finite() { ratio } else { 0.0 }
    } else {
        0.0
    }
}

/// Mean of a field over the rows where it is present; 0 when none are
pub fn mean_present<F>(rows: &[MunicipioRow], value: F) -> f64
where
    F: Fn(&MunicipioRow) -> Option<f64>,
{
    let (sum, count) = rows
        .iter()
        .filter_map(value)
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    safe_ratio(sum, count as f64)
}

/// Calculate HDI averages and per-capita ratios
#[must_use]
pub fn calculate_averages(rows: &[MunicipioRow]) -> CalculatedAverages {
    if rows.is_empty() {
        return CalculatedAverages::default();
    }

    let totals = calculate_totals(rows);

    CalculatedAverages {
        idhm: mean_present(rows, |r| r.idhm),
        idhm_income: mean_present(rows, |r| r.idhm_income),
        idhm_education: mean_present(rows, |r| r.idhm_education),
        idhm_longevity: mean_present(rows, |r| r.idhm_longevity),
        students_per_teacher: safe_ratio(totals.students, totals.teachers),
        doctors_per_1000: safe_ratio(totals.doctors, totals.population) * 1000.0,
        nurses_per_1000: safe_ratio(totals.nurses, totals.population) * 1000.0,
        businesses_per_municipality: safe_ratio(totals.total_businesses, rows.len() as f64),
        spend_per_capita: safe_ratio(totals.health_spend, totals.population),
    }
}
