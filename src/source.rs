//! Data sources for the municipal dataset
//!
//! A `DataSource` turns a dataset name into its raw text. `FileSource` reads
//! from a directory on disk; `StaticSource` serves text held in memory, which
//! is how embedded datasets and tests feed the loader.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use crate::error::Result;
use crate::error::util::safe_read_to_string;

/// Core trait for acquiring raw dataset text
pub trait DataSource: Send + Sync {
    /// Read the dataset called `name`
    fn read<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;

    /// Describe where `name` is read from, for logging
    fn describe(&self, name: &str) -> String {
        name.to_string()
    }
}

/// Reads datasets from files under a base directory
#[derive(Debug, Clone)]
pub struct FileSource {
    base_dir: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Full path of the dataset called `name`
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl DataSource for FileSource {
    fn read<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let path = self.path_for(name);
            safe_read_to_string(&path, "loading municipal dataset").await
        })
    }

    fn describe(&self, name: &str) -> String {
        self.path_for(name).display().to_string()
    }
}

/// Serves the same in-memory text for any dataset name
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    content: String,
}

impl StaticSource {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl DataSource for StaticSource {
    fn read<'a>(
        &'a self,
        _name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move { Ok(self.content.clone()) })
    }

    fn describe(&self, name: &str) -> String {
        format!("memory:{name}")
    }
}
