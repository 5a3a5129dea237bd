use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use log::{info, warn};
use muni_analytics::algorithm::indicators::{DEFAULT_MAX_POINTS, DEFAULT_RANKING_LIMIT};
use muni_analytics::utils::{format_currency, format_number};
use muni_analytics::{
    ChartKind, DataAnalyzer, DataOrigin, FileSource, LoaderConfig, MunicipalDataLoader,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = LoaderConfig::from_env().context("Invalid loader configuration")?;
    info!(
        "Loading municipal data from: {}",
        config.data_dir.join(&config.source_name).display()
    );

    let source = Arc::new(FileSource::new(config.data_dir.clone()));
    let loader = MunicipalDataLoader::new(config, source);

    let start = Instant::now();
    let dataset = loader.load_default().await;
    if dataset.origin() == DataOrigin::Fallback {
        warn!("Data source unavailable, continuing with example data");
    }
    info!("Loaded {} rows in {:?}", dataset.len(), start.elapsed());

    let rows = dataset.rows();
    let totals = DataAnalyzer::calculate_totals(rows);
    info!(
        "Totals: population {}, businesses {}, health spend {}",
        format_number(totals.population),
        format_number(totals.total_businesses),
        format_currency(totals.health_spend)
    );

    for sector in DataAnalyzer::businesses_by_sector(rows) {
        info!("  {}: {}", sector.label, format_number(sector.businesses));
    }

    for state in DataAnalyzer::compare_states(rows).iter().take(5) {
        info!(
            "  {} ({}): {} municipalities, average HDI {:.3}",
            state.state_name.as_deref().unwrap_or("N/A"),
            state.state_code,
            state.municipality_count,
            state.averages.idhm
        );
    }

    let chart = DataAnalyzer::prepare_chart_data(rows, ChartKind::Idhm, DEFAULT_MAX_POINTS);
    info!("HDI chart prepared with {} points", chart.len());

    let top = DataAnalyzer::top_by_idhm(rows, DEFAULT_RANKING_LIMIT);
    info!("Top {} municipalities by HDI", top.len());

    info!("\n{}", DataAnalyzer::generate_summary(rows));
    Ok(())
}
