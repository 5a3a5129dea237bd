use std::sync::Arc;

use crate::utils::{ACRE, AMAZONAS, row};
use muni_analytics::filter::{AndFilter, IncludeAllFilter, RangeFilter, RowFilter, filter_rows};
use muni_analytics::{FilterOptions, MunicipalDataError, MunicipioRow, RowField, YearSelection};

fn rows() -> Vec<MunicipioRow> {
    let mut rows = vec![
        row("Acrelândia", Some(ACRE), Some(12_538.0), Some(0.604)),
        row("Rio Branco", Some(ACRE), Some(336_038.0), Some(0.727)),
        row("Manaus", Some(AMAZONAS), Some(1_802_014.0), Some(0.737)),
        row("Sem Dados", Some(AMAZONAS), None, None),
    ];
    rows[0].year = Some(2010);
    rows[1].year = Some(2010);
    rows[2].year = Some(2000);
    rows
}

fn names(rows: &[MunicipioRow]) -> Vec<&str> {
    rows.iter()
        .filter_map(|r| r.municipality.as_deref())
        .collect()
}

/// Test that default options keep every row in order
#[test]
fn test_empty_options_keep_all_rows() {
    let data = rows();
    let options = FilterOptions::new();
    assert!(options.is_empty());
    assert_eq!(options.apply(&data), data);
}

/// Test that the state filter compares against the full state name
#[test]
fn test_state_filter_uses_state_name() {
    let data = rows();

    let by_name = FilterOptions::new().with_state("Acre").apply(&data);
    assert_eq!(names(&by_name), vec!["Acrelândia", "Rio Branco"]);

    let by_code = FilterOptions::new().with_state("AC").apply(&data);
    assert!(by_code.is_empty());
}

/// Test that "todos" and "all" disable their criterion
#[test]
fn test_sentinels_disable_criteria() {
    let data = rows();
    let options = FilterOptions::new()
        .with_state("todos")
        .with_municipality("all")
        .with_year("todos".parse().unwrap());
    assert!(options.is_empty());
    assert_eq!(options.apply(&data).len(), data.len());

    let direct = FilterOptions {
        state: Some("TODOS".to_string()),
        ..Default::default()
    };
    assert!(direct.is_empty());
}

/// Test year selection, including rows without a year
#[test]
fn test_year_filter() {
    let data = rows();
    let options = FilterOptions::new().with_year(YearSelection::Year(2010));
    let kept = options.apply(&data);
    assert_eq!(names(&kept), vec!["Acrelândia", "Rio Branco"]);

    let err = "dois mil".parse::<YearSelection>().unwrap_err();
    assert!(matches!(
        err,
        MunicipalDataError::InvalidFilter { field: "ano", .. }
    ));
}

/// Test that the HDI range is inclusive and lets absent values pass
#[test]
fn test_idhm_range_passes_absent_values() {
    let data = vec![
        row("A", None, None, Some(0.5)),
        row("B", None, None, None),
        row("C", None, None, Some(0.75)),
    ];
    let kept = FilterOptions::new().with_idhm_range(0.5, 0.7).apply(&data);
    assert_eq!(names(&kept), vec!["A", "B"]);
}

/// Test that criteria combine with AND
#[test]
fn test_criteria_combine() {
    let data = rows();
    let options = FilterOptions::new()
        .with_state("Acre")
        .with_population_range(100_000.0, 2_000_000.0)
        .with_municipality("Rio Branco");
    let kept = options.apply(&data);
    assert_eq!(names(&kept), vec!["Rio Branco"]);
    assert!(options.matches(&data[1]));
    assert!(!options.matches(&data[0]));
}

/// Test composing filters directly
#[test]
fn test_filter_combinators() {
    let data = rows();
    assert_eq!(filter_rows(&data, &IncludeAllFilter).len(), data.len());

    let population: Arc<dyn RowFilter> =
        Arc::new(RangeFilter::new(RowField::Population, (0.0, 400_000.0)));
    let idhm: Arc<dyn RowFilter> = Arc::new(RangeFilter::new(RowField::Idhm, (0.7, 1.0)));
    let filter = AndFilter::new(vec![population, idhm]);
    assert_eq!(filter.len(), 2);
    let kept = filter_rows(&data, &filter);
    assert_eq!(names(&kept), vec!["Rio Branco", "Sem Dados"]);

    let fields = filter.required_fields();
    assert!(fields.contains(&RowField::Population));
    assert!(fields.contains(&RowField::Idhm));
}
