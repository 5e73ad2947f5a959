use serde::{Deserialize, Serialize};

use salary_model::MapTheme;

/// Job title the country map is restricted to.
pub const DEFAULT_REFERENCE_TITLE: &str = "Data Scientist";
/// Number of job titles kept in the ranking chart.
pub const DEFAULT_RANKING_LIMIT: usize = 10;
/// Number of equal-width salary bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 40;

/// Chart parameters that are not part of the filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub theme: MapTheme,
    pub reference_title: String,
    pub ranking_limit: usize,
    pub histogram_bins: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            theme: MapTheme::default(),
            reference_title: DEFAULT_REFERENCE_TITLE.to_string(),
            ranking_limit: DEFAULT_RANKING_LIMIT,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

impl DashboardSettings {
    #[must_use]
    pub fn with_theme(mut self, theme: MapTheme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_reference_title(mut self, title: impl Into<String>) -> Self {
        self.reference_title = title.into();
        self
    }
}
