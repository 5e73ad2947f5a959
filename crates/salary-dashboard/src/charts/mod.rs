//! Chart builders.
//!
//! Each builder is a pure function of the filtered view and returns a plain
//! data specification. An empty view short-circuits every builder with
//! [`ChartError::EmptyView`].

mod choropleth;
mod histogram;
mod line;
mod pie;
mod ranking;

use std::collections::BTreeMap;

use tracing::warn;

use salary_model::{ChartKind, ChartOutcome, ChartSpec, GroupMean};

use crate::error::ChartError;
use crate::filter::FilteredView;
use crate::settings::DashboardSettings;

pub use choropleth::build_country_map;
pub use histogram::build_salary_histogram;
pub use line::build_seniority_line;
pub use pie::{DEFAULT_SLICE_COLOR, build_modality_pie, modality_color};
pub use ranking::build_title_ranking;

/// Bar, histogram and line colour.
pub const ACCENT_COLOR: &str = "#B9332C";

/// Builds all five charts in dashboard order.
pub fn build_charts(view: &FilteredView<'_>, settings: &DashboardSettings) -> Vec<ChartOutcome> {
    if view.is_empty() {
        warn!("filtered view is empty, skipping all charts");
    }
    ChartKind::ALL
        .iter()
        .map(|kind| match build_chart(*kind, view, settings) {
            Ok(spec) => ChartOutcome::Ready(spec),
            Err(err) => ChartOutcome::Unavailable {
                kind: err.kind(),
                reason: err.to_string(),
            },
        })
        .collect()
}

/// Builds a single chart by kind.
pub fn build_chart(
    kind: ChartKind,
    view: &FilteredView<'_>,
    settings: &DashboardSettings,
) -> Result<ChartSpec, ChartError> {
    let spec = match kind {
        ChartKind::CountryMap => ChartSpec::CountryMap(build_country_map(
            view,
            &settings.reference_title,
            settings.theme,
        )?),
        ChartKind::TitleRanking => {
            ChartSpec::TitleRanking(build_title_ranking(view, settings.ranking_limit)?)
        }
        ChartKind::SalaryHistogram => {
            ChartSpec::SalaryHistogram(build_salary_histogram(view, settings.histogram_bins)?)
        }
        ChartKind::ModalityPie => ChartSpec::ModalityPie(build_modality_pie(view)?),
        ChartKind::SeniorityLine => ChartSpec::SeniorityLine(build_seniority_line(view)?),
    };
    Ok(spec)
}

fn ensure_rows(view: &FilteredView<'_>, kind: ChartKind) -> Result<(), ChartError> {
    if view.is_empty() {
        Err(ChartError::EmptyView { kind })
    } else {
        Ok(())
    }
}

/// Mean salary per key, in ascending key order.
fn group_means<'a, I>(rows: I) -> Vec<GroupMean>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for (key, usd) in rows {
        let entry = groups.entry(key).or_insert((0.0, 0));
        entry.0 += usd;
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(label, (sum, count))| GroupMean {
            label: label.to_string(),
            mean_usd: sum / count as f64,
            count,
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use salary_model::SalaryRecord;

    pub fn record(title: &str, seniority: &str, iso3: &str, modality: &str, usd: f64) -> SalaryRecord {
        SalaryRecord {
            year: 2024,
            seniority: seniority.to_string(),
            contract: "integral".to_string(),
            company_size: "media".to_string(),
            modality: modality.to_string(),
            job_title: title.to_string(),
            residence_iso3: iso3.to_string(),
            usd,
            extra: Vec::new(),
        }
    }
}
