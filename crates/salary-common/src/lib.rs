//! Shared utilities for the salary dashboard crates.
//!
//! Polars cell conversion helpers used by ingestion, plus the number
//! formatting shared by the terminal and chart outputs.

pub mod cell;
pub mod format;

// Re-export commonly used functions at crate root for convenience
pub use cell::{
    any_to_f64, any_to_i64, any_to_string, any_to_string_non_empty, parse_f64, parse_i64,
};
pub use format::{format_numeric, format_thousands, format_usd};
