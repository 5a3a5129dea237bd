use std::collections::HashSet;

use crate::utils::{ACRE, AMAZONAS, approx_eq, random_rows, row, seeded_rng};
use muni_analytics::algorithm::indicators::{
    AggregatedMetrics, ChartData, ChartKind, IdhmBand, process_in_chunks,
};
use muni_analytics::models::example::fallback_rows;
use muni_analytics::{DataAnalyzer, MunicipioRow, Sector};
use rand::Rng;
use rand::seq::SliceRandom;

/// Test that totals over a partition add up to the totals of the whole
#[test]
fn test_totals_are_additive() {
    let mut rng = seeded_rng();
    for _ in 0..20 {
        let mut rows = random_rows(&mut rng, 200);
        rows.shuffle(&mut rng);
        let split = rng.random_range(0..=rows.len());
        let (left, right) = rows.split_at(split);

        let whole = DataAnalyzer::calculate_totals(&rows);
        let parts = DataAnalyzer::calculate_totals(left) + DataAnalyzer::calculate_totals(right);
        assert_eq!(parts, whole);
    }
}

/// Test that chunked totals match the sequential totals
#[test]
fn test_chunked_totals_match() {
    let mut rng = seeded_rng();
    let rows = random_rows(&mut rng, 2_500);

    let per_chunk = process_in_chunks(&rows, 300, |chunk| {
        vec![DataAnalyzer::calculate_totals(chunk)]
    });
    let chunked = per_chunk
        .into_iter()
        .fold(AggregatedMetrics::default(), |acc, totals| acc + totals);
    assert_eq!(chunked, DataAnalyzer::calculate_totals(&rows));
}

/// Test that absent values are left out of averages
#[test]
fn test_average_excludes_absent_idhm() {
    let rows = vec![
        row("A", None, None, Some(0.6)),
        row("B", None, None, None),
        row("C", None, None, Some(0.8)),
    ];
    let averages = DataAnalyzer::calculate_averages(&rows);
    assert!(approx_eq(averages.idhm, 0.7));
}

/// Test that averages of an empty set are zero rather than NaN
#[test]
fn test_averages_of_nothing() {
    let averages = DataAnalyzer::calculate_averages(&[]);
    assert!(approx_eq(averages.idhm, 0.0));
    assert!(approx_eq(averages.doctors_per_1000, 0.0));
    assert!(approx_eq(averages.spend_per_capita, 0.0));
}

/// Test that the distribution always lists every band in order
#[test]
fn test_distribution_of_empty_input() {
    let distribution = DataAnalyzer::idhm_distribution(&[]);
    let bands: Vec<IdhmBand> = distribution.iter().map(|b| b.band).collect();
    assert_eq!(bands, IdhmBand::ALL.to_vec());
    assert!(distribution.iter().all(|b| b.count == 0));
    assert_eq!(distribution[0].label, "Muito Baixo (0.0-0.5)");
}

/// Test the top-N ranking order and positions
#[test]
fn test_top_by_idhm() {
    let rows = vec![
        row("A", None, None, Some(0.9)),
        row("B", None, None, Some(0.7)),
        row("C", None, None, Some(0.95)),
    ];
    let top = DataAnalyzer::top_by_idhm(&rows, 2);

    let ranked: Vec<(usize, &str)> = top
        .iter()
        .map(|r| (r.position, r.municipality.as_str()))
        .collect();
    assert_eq!(ranked, vec![(1, "C"), (2, "A")]);
}

/// Test that sectors without businesses are dropped
#[test]
fn test_single_sector_breakdown() {
    let mut only_health = row("A", None, None, None);
    only_health.sectors.get_mut(Sector::Saude).businesses = Some(12.0);
    only_health.sectors.get_mut(Sector::Comercio).businesses = Some(0.0);
    let rows = vec![only_health, row("B", None, None, None)];

    let sectors = DataAnalyzer::businesses_by_sector(&rows);
    assert_eq!(sectors.len(), 1);
    assert_eq!(sectors[0].sector, Sector::Saude);
    assert_eq!(sectors[0].label, "Saúde");
    assert!(approx_eq(sectors[0].businesses, 12.0));
}

/// Test that sampling is deterministic and bounded
#[test]
fn test_chart_sampling_is_deterministic() {
    let mut rng = seeded_rng();
    let rows = random_rows(&mut rng, 1_234);

    for kind in [ChartKind::Idhm, ChartKind::Health, ChartKind::Business] {
        let first = DataAnalyzer::prepare_chart_data(&rows, kind, 50);
        let second = DataAnalyzer::prepare_chart_data(&rows, kind, 50);
        assert_eq!(first, second);
        assert!(first.len() <= 50);
    }

    // ceil(1234 / 50) = 25, so rows 0, 25, 50, ... are picked
    let ChartData::Business(points) =
        DataAnalyzer::prepare_chart_data(&rows, ChartKind::Business, 50)
    else {
        panic!("expected business points");
    };
    let picked: Vec<String> = points.iter().map(|p| p.municipality.clone()).collect();
    let expected: Vec<String> = (0..1_234).step_by(25).map(|i| format!("M{i}")).collect();
    assert_eq!(picked, expected);
}

/// Test that states never mix and populations sum per state
#[test]
fn test_state_comparison_groups_by_state() {
    let rows = vec![
        row("Acrelândia", Some(ACRE), Some(12_538.0), Some(0.604)),
        row("Manaus", Some(AMAZONAS), Some(1_802_014.0), Some(0.737)),
        row("Rio Branco", Some(ACRE), Some(336_038.0), Some(0.727)),
        row("Sem Estado", None, Some(1_000.0), None),
    ];
    let states = DataAnalyzer::compare_states(&rows);

    let codes: Vec<&str> = states.iter().map(|s| s.state_code.as_str()).collect();
    assert_eq!(codes, vec!["AM", "AC"]);

    let acre = &states[1];
    assert_eq!(acre.municipality_count, 2);
    assert_eq!(acre.state_name.as_deref(), Some("Acre"));
    assert!(approx_eq(acre.totals.population, 348_576.0));
    assert!(approx_eq(acre.averages.idhm, (0.604 + 0.727) / 2.0));

    let distinct: HashSet<&str> = codes.iter().copied().collect();
    assert_eq!(distinct.len(), states.len());
}

/// Test the summary over the example row
#[test]
fn test_summary_of_example_data() {
    let rows: Vec<MunicipioRow> = fallback_rows();
    let summary = DataAnalyzer::generate_summary(&rows);
    assert!(summary.contains("Records: 1"));
    assert!(summary.contains("Acrelândia"));
}
