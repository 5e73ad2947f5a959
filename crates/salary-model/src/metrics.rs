use serde::{Deserialize, Serialize};

/// Scalar summaries shown above the charts.
///
/// `Default` is the empty-view state: zero amounts, zero rows and a blank
/// job title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub mean_usd: f64,
    pub max_usd: f64,
    pub count: usize,
    /// Most frequent `cargo` in the view.
    pub top_job_title: String,
}

impl MetricsSummary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
