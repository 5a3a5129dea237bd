//! Logging utilities
//!
//! This module provides the standardized log lines used by the loader.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_operation_complete, log_operation_start, log_warning};
