//! Municipal indicator analysis
//!
//! Pure functions over a slice of rows: totals, averages, sector breakdowns,
//! rankings, HDI band distribution, state comparison and chart projections.
//! None of them mutate their input and all are total over well-typed rows.

pub mod averages;
pub mod chart;
pub mod classification;
pub mod distribution;
pub mod grouping;
pub mod rankings;
pub mod sectors;
pub mod states;
pub mod totals;

use std::collections::BTreeMap;

use crate::filter::FilterOptions;
use crate::models::{FieldValue, MunicipioRow, RowField};

// Re-export commonly used items
pub use averages::{CalculatedAverages, calculate_averages, safe_ratio};
pub use chart::{ChartData, ChartKind, DEFAULT_MAX_POINTS, prepare_chart_data};
pub use classification::{CoverageClass, IdhmBand, classify_coverage, classify_idhm};
pub use distribution::{BandCount, idhm_distribution};
pub use grouping::{DEFAULT_CHUNK_SIZE, GroupAggregate, aggregate_by, process_in_chunks};
pub use rankings::{DEFAULT_RANKING_LIMIT, RankedCoverage, RankedIndicator};
pub use sectors::{SectorBreakdown, SectorSummary, businesses_by_sector};
pub use states::{StateAverages, StateComparison, StateTotals, compare_states};
pub use totals::{AggregatedMetrics, calculate_totals};

/// Functions for municipal indicator analysis
pub struct DataAnalyzer;

impl DataAnalyzer {
    /// Rows matching `filters`
    #[must_use]
    pub fn filtered(rows: &[MunicipioRow], filters: &FilterOptions) -> Vec<MunicipioRow> {
        filters.apply(rows)
    }

    /// Sum of every additive indicator
    #[must_use]
    pub fn calculate_totals(rows: &[MunicipioRow]) -> AggregatedMetrics {
        totals::calculate_totals(rows)
    }

    /// HDI averages and per-capita ratios
    #[must_use]
    pub fn calculate_averages(rows: &[MunicipioRow]) -> CalculatedAverages {
        averages::calculate_averages(rows)
    }

    /// Sectors with businesses, largest first
    #[must_use]
    pub fn businesses_by_sector(rows: &[MunicipioRow]) -> SectorBreakdown {
        sectors::businesses_by_sector(rows)
    }

    #[must_use]
    pub fn top_by_idhm(rows: &[MunicipioRow], limit: usize) -> Vec<RankedIndicator> {
        rankings::top_by_idhm(rows, limit)
    }

    #[must_use]
    pub fn top_by_ideb(rows: &[MunicipioRow], limit: usize) -> Vec<RankedIndicator> {
        rankings::top_by_ideb(rows, limit)
    }

    #[must_use]
    pub fn top_by_health_coverage(rows: &[MunicipioRow], limit: usize) -> Vec<RankedCoverage> {
        rankings::top_by_health_coverage(rows, limit)
    }

    /// Row counts for the five HDI bands
    #[must_use]
    pub fn idhm_distribution(rows: &[MunicipioRow]) -> Vec<BandCount> {
        distribution::idhm_distribution(rows)
    }

    /// One entry per state, most populous first
    #[must_use]
    pub fn compare_states(rows: &[MunicipioRow]) -> Vec<StateComparison> {
        states::compare_states(rows)
    }

    /// Down-sampled projection for a chart
    #[must_use]
    pub fn prepare_chart_data(
        rows: &[MunicipioRow],
        kind: ChartKind,
        max_points: usize,
    ) -> ChartData {
        chart::prepare_chart_data(rows, kind, max_points)
    }

    /// Sorted distinct values of a field
    #[must_use]
    pub fn unique_values(rows: &[MunicipioRow], field: RowField) -> Vec<FieldValue> {
        grouping::unique_values(rows, field)
    }

    /// Per-group sums and averages
    #[must_use]
    pub fn aggregate_by(
        rows: &[MunicipioRow],
        group_by: RowField,
        fields: &[RowField],
    ) -> BTreeMap<FieldValue, GroupAggregate> {
        grouping::aggregate_by(rows, group_by, fields)
    }

    /// Generate a short text summary of a set of rows
    #[must_use]
    pub fn generate_summary(rows: &[MunicipioRow]) -> String {
        let totals = totals::calculate_totals(rows);
        let averages = averages::calculate_averages(rows);

        let mut summary = String::new();
        summary.push_str("Municipal Indicators Summary:\n");
        summary.push_str(&format!("  Records: {}\n", rows.len()));
        summary.push_str(&format!(
            "  Population: {}\n",
            crate::utils::format::format_number(totals.population)
        ));
        summary.push_str(&format!("  Average IDHM: {:.3}\n", averages.idhm));
        summary.push_str(&format!(
            "  Doctors per 1,000: {:.2}\n",
            averages.doctors_per_1000
        ));
        summary.push_str(&format!(
            "  Health spend per capita: {}\n",
            crate::utils::format::format_currency(averages.spend_per_capita)
        ));
        summary.push_str(&format!(
            "  Businesses: {}\n",
            crate::utils::format::format_number(totals.total_businesses)
        ));

        let top = rankings::top_by_idhm(rows, 3);
        if !top.is_empty() {
            summary.push_str("\nTop IDHM:\n");
            for entry in top {
                summary.push_str(&format!(
                    "  {}. {} ({}): {:.3} [{}]\n",
                    entry.position,
                    entry.municipality,
                    entry.state_code,
                    entry.value,
                    classify_idhm(entry.value).label()
                ));
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::example::fallback_rows;

    #[test]
    fn test_summary_mentions_top_municipality() {
        let summary = DataAnalyzer::generate_summary(&fallback_rows());
        assert!(summary.contains("Records: 1"));
        assert!(summary.contains("1. Acrelândia (AC): 0.604 [Médio]"));
        assert!(summary.contains("Population: 12.7K"));
    }

    #[test]
    fn test_summary_of_empty_rows() {
        let summary = DataAnalyzer::generate_summary(&[]);
        assert!(summary.contains("Records: 0"));
        assert!(!summary.contains("Top IDHM"));
    }
}
