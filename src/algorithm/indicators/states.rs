//! State-level comparison
//!
//! Rows are grouped by state code. Rows without a state code are left out.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::models::MunicipioRow;

use super::averages::safe_ratio;

/// Summed figures of one state
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateTotals {
    pub population: f64,
    pub doctors: f64,
    pub nurses: f64,
    pub businesses: f64,
    pub health_spend: f64,
}

/// Averages and ratios of one state
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateAverages {
    /// Mean HDI over the state's rows that have one
    pub idhm: f64,
    pub doctors_per_1000: f64,
    pub nurses_per_1000: f64,
    pub spend_per_capita: f64,
}

/// Comparison entry for one state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateComparison {
    pub state_code: String,
    /// Name taken from the first row seen for the state
    pub state_name: Option<String>,
    pub municipality_count: usize,
    pub totals: StateTotals,
    pub averages: StateAverages,
}

#[derive(Debug, Default)]
struct StateAccumulator {
    state_code: String,
    state_name: Option<String>,
    count: usize,
    totals: StateTotals,
    idhm_sum: f64,
    idhm_count: usize,
}

impl StateAccumulator {
    fn add(&mut self, row: &MunicipioRow) {
        self.count += 1;
        self.totals.population += row.population.unwrap_or(0.0);
        self.totals.doctors += row.doctors.unwrap_or(0.0);
        self.totals.nurses += row.nurses.unwrap_or(0.0);
        self.totals.health_spend += row.health_spend.unwrap_or(0.0);
        self.totals.businesses += row.total_businesses();
        if let Some(idhm) = row.idhm {
            self.idhm_sum += idhm;
            self.idhm_count += 1;
        }
    }

    fn finish(self) -> StateComparison {
        let totals = self.totals;
        StateComparison {
            state_code: self.state_code,
            state_name: self.state_name,
            municipality_count: self.count,
            averages: StateAverages {
                idhm: safe_ratio(self.idhm_sum, self.idhm_count as f64),
                doctors_per_1000: safe_ratio(totals.doctors, totals.population) * 1000.0,
                nurses_per_1000: safe_ratio(totals.nurses, totals.population) * 1000.0,
                spend_per_capita: safe_ratio(totals.health_spend, totals.population),
            },
            totals,
        }
    }
}

/// Compare states, most populous first
///
/// States with equal population keep the order in which they first appear.
#[must_use]
pub fn compare_states(rows: &[MunicipioRow]) -> Vec<StateComparison> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut states: Vec<StateAccumulator> = Vec::new();

    for row in rows {
        let Some(code) = row.state_code.as_deref() else {
            continue;
        };

        let slot = *index.entry(code).or_insert_with(|| {
            states.push(StateAccumulator {
                state_code: code.to_string(),
                state_name: row.state_name.clone(),
                ..Default::default()
            });
            states.len() - 1
        });
        states[slot].add(row);
    }

    let mut comparison: Vec<StateComparison> =
        states.into_iter().map(StateAccumulator::finish).collect();
    comparison.sort_by(|a, b| b.totals.population.total_cmp(&a.totals.population));
    comparison
}
