//! Utility functions for formatting and logging

pub mod format;
pub mod logging;

pub use format::{format_currency, format_number, format_percentage};
