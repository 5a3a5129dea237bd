//! Analysis algorithms over the loaded municipal rows

pub mod indicators;

pub use indicators::DataAnalyzer;
