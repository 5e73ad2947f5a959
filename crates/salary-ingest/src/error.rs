//! Error types for salary data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the salary dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Network Errors ===
    /// Request could not be sent or the body could not be read.
    #[error("failed to fetch {url}: {message}")]
    Network { url: String, message: String },

    /// Server answered with a non-success status.
    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {origin}: {message}")]
    CsvParse { origin: String, message: String },

    /// CSV parsed but holds no data rows.
    #[error("CSV {origin} contains no records")]
    EmptyDataset { origin: String },

    // === Schema Errors ===
    /// Required column not found in the CSV header.
    #[error("required column '{column}' not found in {origin}")]
    MissingColumn { column: String, origin: String },

    /// Required cell is null or blank.
    #[error("missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    /// Cell could not be converted to the column's type.
    #[error("invalid {column} value '{value}' at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
