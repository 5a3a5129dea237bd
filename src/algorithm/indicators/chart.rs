//! Chart-ready projections
//!
//! Large inputs are down-sampled with a fixed stride before projecting. The
//! stride is deterministic for a given input order but is not stratified by
//! any dimension, so sampled output is for display only.

use serde::Serialize;

use crate::models::{MunicipioRow, Sector};

/// Default maximum number of chart points
pub const DEFAULT_MAX_POINTS: usize = 50;

/// Which projection to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Idhm,
    Health,
    Business,
}

/// HDI focused point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdhmPoint {
    pub municipality: String,
    pub idhm: f64,
    pub idhm_income: Option<f64>,
    pub idhm_education: Option<f64>,
    pub idhm_longevity: Option<f64>,
    pub population: Option<f64>,
    pub state_code: Option<String>,
}

/// Health focused point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthPoint {
    pub municipality: Option<String>,
    pub population: f64,
    pub doctors_per_1000: f64,
    pub nurses_per_1000: f64,
    pub spend_per_capita: f64,
    pub health_businesses: f64,
    pub state_code: Option<String>,
}

/// Business count focused point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPoint {
    pub municipality: String,
    pub agronegocio: f64,
    pub comercio: f64,
    pub construcao: f64,
    pub educacao: f64,
    pub industria: f64,
    pub saude: f64,
    pub turismo: f64,
    pub total: f64,
    pub population: Option<f64>,
    pub state_code: Option<String>,
}

/// Projected chart data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "points", rename_all = "camelCase")]
pub enum ChartData {
    Idhm(Vec<IdhmPoint>),
    Health(Vec<HealthPoint>),
    Business(Vec<BusinessPoint>),
}

impl ChartData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Idhm(points) => points.len(),
            Self::Health(points) => points.len(),
            Self::Business(points) => points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stride used to bring `len` rows down to at most `max_points`
///
/// Returns 1 when no sampling is needed and `None` when `max_points` is 0.
#[must_use]
pub const fn sampling_stride(len: usize, max_points: usize) -> Option<usize> {
    if max_points == 0 {
        None
    } else if len > max_points {
        Some(len.div_ceil(max_points))
    } else {
        Some(1)
    }
}

/// Keep every k-th row, starting with the first
#[must_use]
pub fn sample_rows(rows: &[MunicipioRow], max_points: usize) -> Vec<&MunicipioRow> {
    match sampling_stride(rows.len(), max_points) {
        Some(stride) => rows.iter().step_by(stride).collect(),
        None => Vec::new(),
    }
}

/// Sample and project rows for a chart
#[must_use]
pub fn prepare_chart_data(rows: &[MunicipioRow], kind: ChartKind, max_points: usize) -> ChartData {
    let sampled = sample_rows(rows, max_points);

    match kind {
        ChartKind::Idhm => ChartData::Idhm(
            sampled
                .into_iter()
                .filter_map(|row| {
                    Some(IdhmPoint {
                        municipality: row.municipality.clone()?,
                        idhm: row.idhm?,
                        idhm_income: row.idhm_income,
                        idhm_education: row.idhm_education,
                        idhm_longevity: row.idhm_longevity,
                        population: row.population,
                        state_code: row.state_code.clone(),
                    })
                })
                .collect(),
        ),
        ChartKind::Health => ChartData::Health(
            sampled
                .into_iter()
                .filter_map(|row| {
                    let population = row.positive_population()?;
                    Some(HealthPoint {
                        municipality: row.municipality.clone(),
                        population,
                        doctors_per_1000: row.doctors.unwrap_or(0.0) / population * 1000.0,
                        nurses_per_1000: row.nurses.unwrap_or(0.0) / population * 1000.0,
                        spend_per_capita: row.health_spend.unwrap_or(0.0) / population,
                        health_businesses: row.businesses(Sector::Saude).unwrap_or(0.0),
                        state_code: row.state_code.clone(),
                    })
                })
                .collect(),
        ),
        ChartKind::Business => ChartData::Business(
            sampled
                .into_iter()
                .filter_map(|row| {
                    let count = |sector| row.businesses(sector).unwrap_or(0.0);
                    Some(BusinessPoint {
                        municipality: row.municipality.clone()?,
                        agronegocio: count(Sector::Agronegocio),
                        comercio: count(Sector::Comercio),
                        construcao: count(Sector::Construcao),
                        educacao: count(Sector::Educacao),
                        industria: count(Sector::Industria),
                        saude: count(Sector::Saude),
                        turismo: count(Sector::Turismo),
                        total: row.total_businesses(),
                        population: row.population,
                        state_code: row.state_code.clone(),
                    })
                })
                .collect(),
        ),
    }
}
