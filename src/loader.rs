//! Municipal dataset loader
//!
//! `MunicipalDataLoader` owns the process's single copy of the dataset. The
//! first call to `load` acquires, parses and normalizes the data; callers that
//! arrive while that is in flight wait for the same result, and every later
//! call returns the cached `Arc`. Acquisition and parse failures never reach
//! the caller: the loader logs them and serves the built-in example row.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;
use tokio::sync::{OnceCell, watch};

use crate::algorithm::indicators::GroupAggregate;
use crate::algorithm::indicators::grouping::{aggregate_by, unique_values};
use crate::config::LoaderConfig;
use crate::error::Result;
use crate::filter::FilterOptions;
use crate::models::example::fallback_rows;
use crate::models::{FieldValue, MunicipioRawData, MunicipioRow, RowField};
use crate::reader::{ParsedRecords, parse_records_with_preview};
use crate::source::{DataSource, FileSource};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Where the loaded rows came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DataOrigin {
    /// Parsed from the configured source
    Source,
    /// The built-in example row, after a failed load
    Fallback,
}

/// The loaded, immutable row collection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    rows: Vec<MunicipioRow>,
    origin: DataOrigin,
    skipped_records: usize,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Normalize raw records into a dataset
    ///
    /// Records are transformed in parallel; row order follows record order.
    #[must_use]
    pub fn from_records(records: &[MunicipioRawData], skipped_records: usize) -> Self {
        let rows = records.par_iter().map(MunicipioRow::from_raw).collect();
        Self {
            rows,
            origin: DataOrigin::Source,
            skipped_records,
            loaded_at: Utc::now(),
        }
    }

    /// The built-in example dataset
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            rows: fallback_rows(),
            origin: DataOrigin::Fallback,
            skipped_records: 0,
            loaded_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[MunicipioRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub const fn origin(&self) -> DataOrigin {
        self.origin
    }

    /// Records dropped while parsing
    #[must_use]
    pub const fn skipped_records(&self) -> usize {
        self.skipped_records
    }

    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Observable state of a loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LoadStatus {
    /// Nothing requested yet
    Idle,
    /// A load is in flight
    Loading,
    /// Data is available
    Ready { records: usize, origin: DataOrigin },
}

/// Load-once cache of the municipal dataset
pub struct MunicipalDataLoader {
    config: LoaderConfig,
    source: Arc<dyn DataSource>,
    dataset: OnceCell<Arc<Dataset>>,
    status: watch::Sender<LoadStatus>,
}

impl fmt::Debug for MunicipalDataLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MunicipalDataLoader")
            .field("config", &self.config)
            .field("status", &*self.status.borrow())
            .finish_non_exhaustive()
    }
}

impl MunicipalDataLoader {
    /// Create a loader reading through `source`
    #[must_use]
    pub fn new(config: LoaderConfig, source: Arc<dyn DataSource>) -> Self {
        let (status, _) = watch::channel(LoadStatus::Idle);
        Self {
            config,
            source,
            dataset: OnceCell::new(),
            status,
        }
    }

    /// Create a loader reading files from `config.data_dir`
    #[must_use]
    pub fn from_config(config: LoaderConfig) -> Self {
        let source = Arc::new(FileSource::new(config.data_dir.clone()));
        Self::new(config, source)
    }

    #[must_use]
    pub const fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load the dataset called `source_name`, once
    ///
    /// Only the first call's `source_name` is used; later calls, including
    /// concurrent ones, return the dataset that call produced.
    pub async fn load(&self, source_name: &str) -> Arc<Dataset> {
        if let Some(dataset) = self.dataset.get() {
            return Arc::clone(dataset);
        }

        let dataset = self.dataset.get_or_init(|| self.acquire(source_name)).await;
        Arc::clone(dataset)
    }

    /// Load the dataset named in the configuration
    pub async fn load_default(&self) -> Arc<Dataset> {
        let name = self.config.source_name.clone();
        self.load(&name).await
    }

    async fn acquire(&self, source_name: &str) -> Arc<Dataset> {
        self.status.send_replace(LoadStatus::Loading);

        let target = self.source.describe(source_name);
        let start = Instant::now();
        log_operation_start("Loading municipal data from", &target);

        let dataset = match self.read_and_parse(source_name).await {
            Ok(parsed) => {
                if parsed.skipped > 0 {
                    info!("Skipped {} malformed records in {target}", parsed.skipped);
                }
                Dataset::from_records(&parsed.records, parsed.skipped)
            }
            Err(e) => {
                log_warning(
                    &format!("Failed to load municipal data ({e}), using example data"),
                    Some(&target),
                );
                Dataset::fallback()
            }
        };

        log_operation_complete("loaded", &target, dataset.len(), Some(start.elapsed()));

        self.status.send_replace(LoadStatus::Ready {
            records: dataset.len(),
            origin: dataset.origin(),
        });
        Arc::new(dataset)
    }

    async fn read_and_parse(&self, source_name: &str) -> Result<ParsedRecords> {
        let content = self.source.read(source_name).await?;
        debug!("Read {} bytes for {source_name}", content.len());
        parse_records_with_preview(&content, self.config.line_preview_chars)
    }

    /// Whether a dataset is available
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.dataset.initialized()
    }

    /// The loaded dataset, if any
    #[must_use]
    pub fn dataset(&self) -> Option<Arc<Dataset>> {
        self.dataset.get().cloned()
    }

    /// The loaded rows; empty before the first load completes
    #[must_use]
    pub fn get_data(&self) -> &[MunicipioRow] {
        self.dataset.get().map_or(&[], |dataset| dataset.rows())
    }

    /// Loaded rows matching `filters`
    #[must_use]
    pub fn get_filtered_data(&self, filters: &FilterOptions) -> Vec<MunicipioRow> {
        filters.apply(self.get_data())
    }

    /// Sorted distinct values of `field` across the loaded rows
    #[must_use]
    pub fn get_unique_values(&self, field: RowField) -> Vec<FieldValue> {
        unique_values(self.get_data(), field)
    }

    /// Group the loaded rows by `group_by` and aggregate `fields`
    #[must_use]
    pub fn get_aggregated_data(
        &self,
        group_by: RowField,
        fields: &[RowField],
    ) -> BTreeMap<FieldValue, GroupAggregate> {
        aggregate_by(self.get_data(), group_by, fields)
    }

    /// Current load status
    #[must_use]
    pub fn status(&self) -> LoadStatus {
        *self.status.borrow()
    }

    /// Watch the load status
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LoadStatus> {
        self.status.subscribe()
    }
}
