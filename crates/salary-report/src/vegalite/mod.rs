//! Vega-Lite JSON writer.
//!
//! Each [`ChartSpec`] variant maps to a single Vega-Lite view with inline
//! data values:
//!
//! - country map -> layered `geoshape` over a world GeoJSON, joined by ISO3
//! - title ranking -> horizontal `bar`
//! - salary histogram -> pre-binned `bar` with `x`/`x2`
//! - modality pie -> `arc` with a fixed colour range
//! - seniority line -> `line` with points

mod geo;
mod marks;

use serde_json::{Value, json};

use salary_model::ChartSpec;

use crate::error::{ReportError, Result};
use crate::writer::ChartWriter;

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v6.json";

/// World countries with ISO3 codes as feature ids.
pub const WORLD_GEOJSON_URL: &str =
    "https://raw.githubusercontent.com/johan/world.geo.json/master/countries.geo.json";

/// Vega-Lite JSON writer.
#[derive(Debug, Clone)]
pub struct VegaLiteWriter {
    schema: String,
    geojson_url: String,
    pretty: bool,
}

impl VegaLiteWriter {
    pub fn new() -> Self {
        Self {
            schema: VEGA_LITE_SCHEMA.to_string(),
            geojson_url: WORLD_GEOJSON_URL.to_string(),
            pretty: true,
        }
    }

    /// Use a different world GeoJSON, e.g. a locally served copy.
    pub fn with_geojson_url(mut self, url: impl Into<String>) -> Self {
        self.geojson_url = url.into();
        self
    }

    /// Emit single-line JSON.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Builds the Vega-Lite document for `chart`.
    pub fn to_value(&self, chart: &ChartSpec) -> Value {
        let mut spec = match chart {
            ChartSpec::CountryMap(map) => geo::country_map(map, &self.geojson_url),
            ChartSpec::TitleRanking(ranking) => marks::title_ranking(ranking),
            ChartSpec::SalaryHistogram(histogram) => marks::salary_histogram(histogram),
            ChartSpec::ModalityPie(pie) => marks::modality_pie(pie),
            ChartSpec::SeniorityLine(line) => marks::seniority_line(line),
        };
        spec["$schema"] = json!(self.schema);
        spec["title"] = json!(chart.title());
        spec
    }
}

impl Default for VegaLiteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartWriter for VegaLiteWriter {
    fn write(&self, chart: &ChartSpec) -> Result<String> {
        let value = self.to_value(chart);
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        rendered.map_err(|source| ReportError::Json {
            what: format!("{} chart", chart.kind()),
            source,
        })
    }

    fn file_extension(&self) -> &'static str {
        "vl.json"
    }
}

/// Number format used on salary axes and tooltips.
const USD_FORMAT: &str = "$,.0f";

fn usd_axis(title: &str) -> Value {
    json!({ "title": title, "format": USD_FORMAT })
}
