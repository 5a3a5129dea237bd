//! Configuration for `MunicipalDataLoader`.

use std::path::PathBuf;

use crate::error::{MunicipalDataError, Result};

/// Default dataset file name
pub const DEFAULT_SOURCE_NAME: &str = "dados_municipais.txt";

/// Default number of characters of a rejected line shown in warnings
pub const DEFAULT_LINE_PREVIEW_CHARS: usize = 100;

/// Environment variable holding the data directory
pub const ENV_DATA_DIR: &str = "MUNI_DATA_DIR";
/// Environment variable holding the dataset file name
pub const ENV_SOURCE_NAME: &str = "MUNI_SOURCE_NAME";
/// Environment variable holding the warning preview length
pub const ENV_LINE_PREVIEW: &str = "MUNI_LINE_PREVIEW";

/// Configuration for the `MunicipalDataLoader`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Directory the file source resolves dataset names against
    pub data_dir: PathBuf,
    /// Dataset name used by `load_default`
    pub source_name: String,
    /// How much of a malformed line is echoed in the parse warning
    pub line_preview_chars: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            line_preview_chars: DEFAULT_LINE_PREVIEW_CHARS,
        }
    }
}

impl LoaderConfig {
    /// Build a configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    ///
    /// Missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(name) = lookup(ENV_SOURCE_NAME).filter(|v| !v.trim().is_empty()) {
            config.source_name = name.trim().to_string();
        }

        if let Some(preview) = lookup(ENV_LINE_PREVIEW) {
            config.line_preview_chars = preview.trim().parse().map_err(|_| {
                MunicipalDataError::Config(format!(
                    "{ENV_LINE_PREVIEW} must be a non-negative integer, got {preview:?}"
                ))
            })?;
        }

        Ok(config)
    }

    /// Set the data directory
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set the dataset name
    #[must_use]
    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }
}
