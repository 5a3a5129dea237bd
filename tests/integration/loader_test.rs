use std::sync::Arc;
use std::time::Duration;

use crate::utils::{CountingSource, SAMPLE_LINES, approx_eq};
use futures::future::join_all;
use muni_analytics::{
    DataOrigin, FieldValue, FileSource, FilterOptions, LoadStatus, LoaderConfig,
    MunicipalDataLoader, RowField, StaticSource, YearSelection,
};

fn loader_with(source: Arc<CountingSource>) -> MunicipalDataLoader {
    MunicipalDataLoader::new(LoaderConfig::default(), source)
}

/// Test that repeated loads return the same dataset without re-reading
#[tokio::test]
async fn test_load_is_idempotent() {
    let source = Arc::new(CountingSource::new(SAMPLE_LINES));
    let loader = loader_with(source.clone());

    let first = loader.load_default().await;
    let second = loader.load_default().await;
    let third = loader.load("some_other_file.txt").await;

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &third));
    assert_eq!(source.reads(), 1);
    assert_eq!(first.len(), 3);
    assert_eq!(first.origin(), DataOrigin::Source);
}

/// Test that concurrent first loads share a single acquisition
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_loads_converge() {
    let delay = Duration::from_millis(50);
    let source = Arc::new(CountingSource::new(SAMPLE_LINES).with_delay(delay));
    let loader = Arc::new(loader_with(source.clone()));

    let handles = (0..8).map(|_| {
        let loader = Arc::clone(&loader);
        tokio::spawn(async move { loader.load_default().await })
    });
    let datasets: Vec<_> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.expect("load task panicked"))
        .collect();

    assert_eq!(source.reads(), 1);
    for dataset in &datasets[1..] {
        assert!(Arc::ptr_eq(&datasets[0], dataset));
    }
}

/// Test that an unparseable payload falls back to the example row
#[tokio::test]
async fn test_garbage_payload_falls_back() {
    let loader = MunicipalDataLoader::new(
        LoaderConfig::default(),
        Arc::new(StaticSource::new("this is not json\nnor is this")),
    );
    let dataset = loader.load_default().await;

    assert_eq!(dataset.origin(), DataOrigin::Fallback);
    assert_eq!(dataset.len(), 1);
    let row = &dataset.rows()[0];
    assert_eq!(row.municipality.as_deref(), Some("Acrelândia"));
    assert_eq!(row.state_code.as_deref(), Some("AC"));
    assert_eq!(row.year, Some(2010));
}

/// Test that a missing file falls back to the example row
#[tokio::test]
async fn test_missing_file_falls_back() {
    let dir = std::env::temp_dir().join(format!("muni-missing-{}", std::process::id()));
    let config = LoaderConfig::default()
        .with_data_dir(&dir)
        .with_source_name("does_not_exist.txt");
    let loader = MunicipalDataLoader::from_config(config);

    let dataset = loader.load_default().await;
    assert_eq!(dataset.origin(), DataOrigin::Fallback);
    assert_eq!(loader.get_data().len(), 1);
}

/// Test loading a line-delimited file from disk, skipping malformed lines
#[tokio::test]
async fn test_load_from_file_skips_bad_lines() {
    let dir = std::env::temp_dir().join(format!("muni-loader-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let content = format!("{SAMPLE_LINES}{{broken line\n");
    tokio::fs::write(dir.join("dados.txt"), content).await.unwrap();

    let loader = MunicipalDataLoader::new(
        LoaderConfig::default().with_source_name("dados.txt"),
        Arc::new(FileSource::new(&dir)),
    );
    let dataset = loader.load_default().await;

    assert_eq!(dataset.origin(), DataOrigin::Source);
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.skipped_records(), 1);

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

/// Test the accessors over loaded data
#[tokio::test]
async fn test_loader_accessors() {
    let loader = MunicipalDataLoader::new(
        LoaderConfig::default(),
        Arc::new(StaticSource::new(SAMPLE_LINES)),
    );
    assert!(loader.get_data().is_empty());
    loader.load_default().await;

    let states = loader.get_unique_values(RowField::StateCode);
    assert_eq!(
        states,
        vec![FieldValue::Text("AC".into()), FieldValue::Text("AM".into())]
    );

    let acre = loader.get_filtered_data(
        &FilterOptions::new()
            .with_year(YearSelection::Year(2010))
            .with_state("Acre"),
    );
    assert_eq!(acre.len(), 2);

    let grouped = loader.get_aggregated_data(RowField::StateCode, &[RowField::Population]);
    let ac = &grouped[&FieldValue::Text("AC".into())];
    assert_eq!(ac.count, 2);
    assert!(approx_eq(ac.sums[&RowField::Population], 348_576.0));
    assert!(approx_eq(ac.averages[&RowField::Population], 174_288.0));
}

/// Test that subscribers observe the load completing
#[tokio::test]
async fn test_status_subscription() {
    let loader = MunicipalDataLoader::new(
        LoaderConfig::default(),
        Arc::new(StaticSource::new(SAMPLE_LINES)),
    );
    let mut status = loader.subscribe();
    assert_eq!(*status.borrow(), LoadStatus::Idle);

    loader.load_default().await;

    status.changed().await.unwrap();
    assert_eq!(
        *status.borrow_and_update(),
        LoadStatus::Ready {
            records: 3,
            origin: DataOrigin::Source
        }
    );
    assert!(loader.is_ready());
}
