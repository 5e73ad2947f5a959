//! Filter, metric, and chart pipeline for the salary dashboard.
//!
//! Everything here is a pure function of the loaded [`Dataset`] and the
//! current [`FilterSelection`]. [`recompute`] runs the whole pipeline;
//! [`DashboardState`] wraps it behind discrete input-change events.
//!
//! [`Dataset`]: salary_model::Dataset
//! [`FilterSelection`]: salary_model::FilterSelection

pub mod charts;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod options;
pub mod pipeline;
pub mod settings;
pub mod state;

pub use charts::build_charts;
pub use error::ChartError;
pub use filter::{FilteredView, apply_filters};
pub use metrics::compute_metrics;
pub use options::filter_options;
pub use pipeline::{Dashboard, recompute};
pub use settings::DashboardSettings;
pub use state::{DashboardEvent, DashboardState};
