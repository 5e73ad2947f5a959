use salary_model::{ChartKind, CountryChoropleth, CountryMean, MapTheme};

use super::{ensure_rows, group_means};
use crate::error::ChartError;
use crate::filter::FilteredView;

const COLOR_SCALE: &str = "reds";
const MAP_WIDTH: u32 = 1000;
const MAP_HEIGHT: u32 = 750;

/// Mean salary per residence country for one job title.
///
/// Intensity is each country's mean divided by the highest country mean. A
/// view with no rows for `reference_title` yields a map with no countries.
pub fn build_country_map(
    view: &FilteredView<'_>,
    reference_title: &str,
    theme: MapTheme,
) -> Result<CountryChoropleth, ChartError> {
    ensure_rows(view, ChartKind::CountryMap)?;

    let groups = group_means(
        view.iter()
            .filter(|record| record.job_title == reference_title)
            .map(|record| (record.residence_iso3.as_str(), record.usd)),
    );
    let highest = groups
        .iter()
        .map(|group| group.mean_usd)
        .fold(0.0_f64, f64::max);
    let countries = groups
        .into_iter()
        .map(|group| CountryMean {
            intensity: if highest > 0.0 {
                group.mean_usd / highest
            } else {
                0.0
            },
            iso3: group.label,
            mean_usd: group.mean_usd,
        })
        .collect();

    Ok(CountryChoropleth {
        title: format!("Average {reference_title} salary by country"),
        reference_title: reference_title.to_string(),
        color_scale: COLOR_SCALE.to_string(),
        countries,
        style: theme.style(),
        width: MAP_WIDTH,
        height: MAP_HEIGHT,
    })
}
