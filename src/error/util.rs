//! Utility functions for error handling
//!
//! This module provides file helpers that attach the path and the purpose of
//! the read to any failure.

use std::io;
use std::path::Path;

use crate::error::{MunicipalDataError, Result};

/// Check that a path exists and is a regular file
///
/// # Arguments
/// * `path` - The path to check
/// * `purpose` - Why the file is needed (for error context)
pub async fn validate_file(path: &Path, purpose: &str) -> Result<()> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(MunicipalDataError::NotFound {
                path: path.to_path_buf(),
                purpose: purpose.to_string(),
            });
        }
        Err(e) => {
            return Err(MunicipalDataError::io(
                path,
                format!("Failed to inspect file for: {purpose}"),
                e,
            ));
        }
    };

    if !metadata.is_file() {
        return Err(MunicipalDataError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Safely read a file to string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
///
/// # Returns
/// * `Result<String>` - The file content or a detailed error
pub async fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    validate_file(path, purpose).await?;

    tokio::fs::read_to_string(path).await.map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::InvalidData => {
                "File contains invalid UTF-8 data - cannot read as text".to_string()
            }
            _ => format!("Failed to read file content for: {purpose}"),
        };
        MunicipalDataError::io(path, context, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let path = std::env::temp_dir().join("muni-analytics-definitely-missing.txt");
        let err = safe_read_to_string(&path, "unit test").await.unwrap_err();
        assert!(matches!(err, MunicipalDataError::NotFound { .. }));
        assert!(err.is_acquisition_error());
    }

    #[tokio::test]
    async fn test_directory_is_not_a_file() {
        let dir = std::env::temp_dir();
        let err = safe_read_to_string(&dir, "unit test").await.unwrap_err();
        assert!(matches!(err, MunicipalDataError::NotAFile { .. }));
    }
}
