//! Writing charts and the dashboard index to an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use salary_common::{format_thousands, format_usd};
use salary_model::{ChartKind, ChartOutcome, FilterSelection, MapTheme, MetricsSummary};

use crate::error::{ReportError, Result};
use crate::writer::ChartWriter;

/// File name of the dashboard index written by [`write_bundle`].
pub const BUNDLE_FILE_NAME: &str = "dashboard.json";

/// Metrics formatted the way the page shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsDisplay {
    pub mean_usd: String,
    pub max_usd: String,
    pub count: String,
    pub top_job_title: String,
}

impl From<&MetricsSummary> for MetricsDisplay {
    fn from(metrics: &MetricsSummary) -> Self {
        Self {
            mean_usd: format_usd(metrics.mean_usd),
            max_usd: format_usd(metrics.max_usd),
            count: format_thousands(metrics.count as f64),
            top_job_title: metrics.top_job_title.clone(),
        }
    }
}

/// Index entry for one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BundleChart {
    Ready {
        kind: ChartKind,
        title: String,
        /// Path relative to the bundle directory.
        file: String,
    },
    Unavailable { kind: ChartKind, reason: String },
}

/// Everything needed to render the dashboard page from disk.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardBundle {
    pub source: String,
    pub theme: MapTheme,
    pub selection: FilterSelection,
    pub metrics: MetricsSummary,
    pub display: MetricsDisplay,
    pub charts: Vec<BundleChart>,
}

impl DashboardBundle {
    pub fn new(
        source: impl Into<String>,
        theme: MapTheme,
        selection: FilterSelection,
        metrics: MetricsSummary,
        charts: Vec<BundleChart>,
    ) -> Self {
        let display = MetricsDisplay::from(&metrics);
        Self {
            source: source.into(),
            theme,
            selection,
            metrics,
            display,
            charts,
        }
    }
}

/// Writes every ready chart into `dir`, creating it if needed.
///
/// Unavailable charts produce no file, and a file left for them by an earlier
/// run is removed. Their reason is kept in the returned index entries.
pub fn write_charts<W: ChartWriter>(
    writer: &W,
    dir: &Path,
    outcomes: &[ChartOutcome],
) -> Result<Vec<BundleChart>> {
    create_dir(dir)?;
    let mut entries = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        let entry = match outcome {
            ChartOutcome::Ready(spec) => {
                let file = format!("{}.{}", spec.kind().slug(), writer.file_extension());
                let path = dir.join(&file);
                let rendered = writer.write(spec)?;
                write_file(&path, &rendered)?;
                debug!(chart = %spec.kind(), path = %path.display(), "chart written");
                BundleChart::Ready {
                    kind: spec.kind(),
                    title: spec.title().to_string(),
                    file,
                }
            }
            ChartOutcome::Unavailable { kind, reason } => {
                let path = dir.join(format!("{}.{}", kind.slug(), writer.file_extension()));
                if remove_stale(&path)? {
                    debug!(chart = %kind, path = %path.display(), "stale chart removed");
                }
                BundleChart::Unavailable {
                    kind: *kind,
                    reason: reason.clone(),
                }
            }
        };
        entries.push(entry);
    }
    info!(
        dir = %dir.display(),
        written = entries
            .iter()
            .filter(|entry| matches!(entry, BundleChart::Ready { .. }))
            .count(),
        "charts written"
    );
    Ok(entries)
}

/// Writes `dashboard.json` into `dir` and returns its path.
pub fn write_bundle(dir: &Path, bundle: &DashboardBundle) -> Result<PathBuf> {
    create_dir(dir)?;
    let path = dir.join(BUNDLE_FILE_NAME);
    let json = serde_json::to_string_pretty(bundle).map_err(|source| ReportError::Json {
        what: "dashboard bundle".to_string(),
        source,
    })?;
    write_file(&path, &json)?;
    Ok(path)
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Deletes `path` if present. Returns whether a file was removed.
fn remove_stale(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(ReportError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
