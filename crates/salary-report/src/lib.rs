//! Chart output for the salary dashboard.
//!
//! Chart specifications are plain data; a [`ChartWriter`] turns each one
//! into a renderable document. [`VegaLiteWriter`] emits Vega-Lite JSON that
//! any page can draw with `vega-embed`.

mod bundle;
mod error;
mod vegalite;
mod writer;

pub use bundle::{
    BUNDLE_FILE_NAME, BundleChart, DashboardBundle, MetricsDisplay, write_bundle, write_charts,
};
pub use error::{ReportError, Result};
pub use vegalite::{VEGA_LITE_SCHEMA, VegaLiteWriter, WORLD_GEOJSON_URL};
pub use writer::ChartWriter;
