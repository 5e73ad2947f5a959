//! One full pass from selection to metrics and charts.

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use salary_model::{ChartOutcome, Dataset, FilterSelection, MetricsSummary};

use crate::charts::build_charts;
use crate::filter::{FilteredView, apply_filters};
use crate::metrics::compute_metrics;
use crate::settings::DashboardSettings;

/// Everything the page shows for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard<'a> {
    pub view: FilteredView<'a>,
    pub metrics: MetricsSummary,
    pub charts: Vec<ChartOutcome>,
}

impl Dashboard<'_> {
    pub fn ready_charts(&self) -> usize {
        self.charts
            .iter()
            .filter(|outcome| outcome.spec().is_some())
            .count()
    }
}

/// Filters the dataset and derives metrics and chart specifications.
///
/// Pure: the same inputs always produce the same dashboard.
pub fn recompute<'a>(
    dataset: &'a Dataset,
    selection: &FilterSelection,
    settings: &DashboardSettings,
) -> Dashboard<'a> {
    let start = Instant::now();
    let view = apply_filters(dataset, selection);
    let metrics = compute_metrics(&view);
    let charts = build_charts(&view, settings);
    let dashboard = Dashboard {
        view,
        metrics,
        charts,
    };
    debug!(
        rows = dashboard.view.len(),
        charts_ready = dashboard.ready_charts(),
        duration_us = start.elapsed().as_micros(),
        "dashboard recomputed"
    );
    dashboard
}
