use salary_model::ChartSpec;

use crate::error::Result;

/// Turns a chart specification into a renderable document.
///
/// Writers never aggregate; everything they draw is already in the [`ChartSpec`].
pub trait ChartWriter {
    /// Render one chart.
    fn write(&self, chart: &ChartSpec) -> Result<String>;

    /// File extension used by [`write_charts`](crate::write_charts), without the dot.
    fn file_extension(&self) -> &'static str;
}
