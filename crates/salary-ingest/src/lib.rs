//! Salary data ingestion.
//!
//! Resolves where the salary CSV lives, fetches or opens it, parses it into a
//! Polars `DataFrame`, and validates the frame into a typed [`Dataset`].
//! Any failure along the way is fatal for the run and surfaces as an
//! [`IngestError`].
//!
//! # Example
//!
//! ```ignore
//! use salary_ingest::{DataSource, load_dataset};
//!
//! let dataset = load_dataset(&DataSource::default())?;
//! println!("{} salary records", dataset.len());
//! ```
//!
//! [`Dataset`]: salary_model::Dataset

mod csv;
mod error;
mod fetch;
mod loader;
mod schema;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{read_csv_bytes, read_csv_file};

// === Remote Fetch ===
pub use fetch::fetch_csv;

// === Schema Validation ===
pub use schema::{dataset_from_frame, resolve_columns};

// === Loading ===
pub use loader::load_dataset;
pub use source::{DEFAULT_SOURCE_URL, DataSource};
