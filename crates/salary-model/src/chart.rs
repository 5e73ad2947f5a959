//! Chart specifications.
//!
//! Each chart is plain data: the aggregated rows plus the styling the page
//! needs. Rendering is left to a writer so aggregation stays testable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one of the five dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    CountryMap,
    TitleRanking,
    SalaryHistogram,
    ModalityPie,
    SeniorityLine,
}

impl ChartKind {
    /// Dashboard order.
    pub const ALL: [ChartKind; 5] = [
        ChartKind::CountryMap,
        ChartKind::TitleRanking,
        ChartKind::SalaryHistogram,
        ChartKind::ModalityPie,
        ChartKind::SeniorityLine,
    ];

    /// File stem used when a chart is written to disk.
    pub fn slug(self) -> &'static str {
        match self {
            ChartKind::CountryMap => "country_map",
            ChartKind::TitleRanking => "title_ranking",
            ChartKind::SalaryHistogram => "salary_histogram",
            ChartKind::ModalityPie => "modality_pie",
            ChartKind::SeniorityLine => "seniority_line",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Map colour theme. Only affects styling, never the data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapTheme {
    #[default]
    Dark,
    Light,
}

impl MapTheme {
    pub fn style(self) -> MapStyle {
        let base = match self {
            MapTheme::Dark => "#0E1117",
            MapTheme::Light => "#FFFFFF",
        };
        MapStyle {
            background: base.to_string(),
            country_border: base.to_string(),
            frame: base.to_string(),
            land: base.to_string(),
            ocean: base.to_string(),
            coastline: "#741C18".to_string(),
        }
    }
}

impl fmt::Display for MapTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapTheme::Dark => f.write_str("dark"),
            MapTheme::Light => f.write_str("light"),
        }
    }
}

/// Geo styling derived from a [`MapTheme`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStyle {
    pub background: String,
    pub country_border: String,
    pub frame: String,
    pub land: String,
    pub ocean: String,
    pub coastline: String,
}

/// Mean salary for one residence country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryMean {
    pub iso3: String,
    pub mean_usd: f64,
    /// `mean_usd` relative to the highest country mean, in `[0, 1]`.
    pub intensity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryChoropleth {
    pub title: String,
    /// Job title the map is restricted to.
    pub reference_title: String,
    pub color_scale: String,
    pub countries: Vec<CountryMean>,
    pub style: MapStyle,
    pub width: u32,
    pub height: u32,
}

/// Mean salary of one category (job title, seniority level).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMean {
    pub label: String,
    pub mean_usd: f64,
    pub count: usize,
}

/// Highest-paid job titles, ascending so the largest bar renders on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRanking {
    pub title: String,
    pub bars: Vec<GroupMean>,
    pub color: String,
}

/// Half-open `[start, end)` bin; the last bin also includes `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryHistogram {
    pub title: String,
    pub bins: Vec<HistogramBin>,
    /// Fraction of each bin's width left empty between bars.
    pub bar_gap: f64,
    pub color: String,
}

impl SalaryHistogram {
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// Share of all rows, in `[0, 1]`.
    pub share: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalityPie {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeniorityLine {
    pub title: String,
    pub points: Vec<GroupMean>,
    pub color: String,
    pub line_width: f64,
}

/// A built chart, one variant per chart type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "chart", rename_all = "snake_case")]
pub enum ChartSpec {
    CountryMap(CountryChoropleth),
    TitleRanking(TitleRanking),
    SalaryHistogram(SalaryHistogram),
    ModalityPie(ModalityPie),
    SeniorityLine(SeniorityLine),
}

impl ChartSpec {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSpec::CountryMap(_) => ChartKind::CountryMap,
            ChartSpec::TitleRanking(_) => ChartKind::TitleRanking,
            ChartSpec::SalaryHistogram(_) => ChartKind::SalaryHistogram,
            ChartSpec::ModalityPie(_) => ChartKind::ModalityPie,
            ChartSpec::SeniorityLine(_) => ChartKind::SeniorityLine,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ChartSpec::CountryMap(chart) => &chart.title,
            ChartSpec::TitleRanking(chart) => &chart.title,
            ChartSpec::SalaryHistogram(chart) => &chart.title,
            ChartSpec::ModalityPie(chart) => &chart.title,
            ChartSpec::SeniorityLine(chart) => &chart.title,
        }
    }
}

/// Result of building one chart for the current view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ChartOutcome {
    Ready(ChartSpec),
    /// The chart was skipped; the page shows an error indicator instead.
    Unavailable { kind: ChartKind, reason: String },
}

impl ChartOutcome {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartOutcome::Ready(spec) => spec.kind(),
            ChartOutcome::Unavailable { kind, .. } => *kind,
        }
    }

    pub fn spec(&self) -> Option<&ChartSpec> {
        match self {
            ChartOutcome::Ready(spec) => Some(spec),
            ChartOutcome::Unavailable { .. } => None,
        }
    }
}
