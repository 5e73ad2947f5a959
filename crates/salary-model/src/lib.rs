//! Data model for the data-industry salary dashboard.
//!
//! Typed records validated at load time, the five-column filter selection,
//! the metric summary, and plain-data chart specifications handed to a
//! writer for rendering.

pub mod chart;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod record;

pub use chart::{
    ChartKind, ChartOutcome, ChartSpec, CountryChoropleth, CountryMean, GroupMean, HistogramBin,
    MapStyle, MapTheme, ModalityPie, PieSlice, SalaryHistogram, SeniorityLine, TitleRanking,
};
pub use error::{Result, SelectionError};
pub use filter::{FilterColumn, FilterOptions, FilterSelection};
pub use metrics::MetricsSummary;
pub use record::{Dataset, REQUIRED_COLUMNS, SalaryRecord, columns};
