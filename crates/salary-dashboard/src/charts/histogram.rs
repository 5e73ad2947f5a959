use salary_model::{ChartKind, HistogramBin, SalaryHistogram};

use super::{ACCENT_COLOR, ensure_rows};
use crate::error::ChartError;
use crate::filter::FilteredView;

const BAR_GAP: f64 = 0.2;

/// Buckets salaries into `bins` equal-width bins spanning the observed range.
///
/// The last bin is closed on the right so the maximum lands in it. When all
/// salaries are equal the bins span one dollar centred on that value. A bin
/// count of zero is treated as one.
pub fn build_salary_histogram(
    view: &FilteredView<'_>,
    bins: usize,
) -> Result<SalaryHistogram, ChartError> {
    ensure_rows(view, ChartKind::SalaryHistogram)?;

    let bins = bins.max(1);
    let (min, max) = view
        .salaries()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), usd| {
            (lo.min(usd), hi.max(usd))
        });
    let (low, high) = if max > min {
        (min, max)
    } else {
        (min - 0.5, min + 0.5)
    };
    let width = (high - low) / bins as f64;

    let mut counts = vec![0usize; bins];
    for usd in view.salaries() {
        counts[bin_index(usd, low, width, bins)] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            start: low + idx as f64 * width,
            end: if idx + 1 == bins {
                high
            } else {
                low + (idx + 1) as f64 * width
            },
            count,
        })
        .collect();

    Ok(SalaryHistogram {
        title: "Annual salary distribution".to_string(),
        bins,
        bar_gap: BAR_GAP,
        color: ACCENT_COLOR.to_string(),
    })
}

fn bin_index(usd: f64, low: f64, width: f64, bins: usize) -> usize {
    let raw = ((usd - low) / width).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(bins - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::record;
    use super::*;

    fn salaries(values: &[f64]) -> Vec<salary_model::SalaryRecord> {
        values
            .iter()
            .map(|usd| record("Data Engineer", "senior", "USA", "remoto", *usd))
            .collect()
    }

    #[test]
    fn counts_sum_to_row_count() {
        let records = salaries(&[10_000.0, 25_000.0, 25_000.0, 80_000.0, 410_000.0]);
        let view: FilteredView<'_> = records.iter().collect();
        let histogram = build_salary_histogram(&view, 40).unwrap();
        assert_eq!(histogram.bins.len(), 40);
        assert_eq!(histogram.total(), 5);
        assert_eq!(histogram.bins[0].start, 10_000.0);
        assert_eq!(histogram.bins[39].end, 410_000.0);
        assert_eq!(histogram.bins[0].count, 1);
        // 25k and 80k fall in bins 1 and 7 of width 10k
        assert_eq!(histogram.bins[1].count, 2);
        assert_eq!(histogram.bins[7].count, 1);
        assert_eq!(histogram.bins[39].count, 1);
        assert_eq!(histogram.bar_gap, 0.2);
    }

    #[test]
    fn identical_salaries_share_a_bin() {
        let records = salaries(&[50_000.0, 50_000.0]);
        let view: FilteredView<'_> = records.iter().collect();
        let histogram = build_salary_histogram(&view, 40).unwrap();
        assert_eq!(histogram.total(), 2);
        assert_eq!(histogram.bins.iter().filter(|bin| bin.count > 0).count(), 1);
        assert_eq!(histogram.bins[0].start, 49_999.5);
        assert_eq!(histogram.bins[39].end, 50_000.5);
    }

    #[test]
    fn empty_view_is_an_error() {
        let view: FilteredView<'_> = std::iter::empty().collect();
        assert_eq!(
            build_salary_histogram(&view, 40).unwrap_err(),
            ChartError::EmptyView {
                kind: ChartKind::SalaryHistogram
            }
        );
    }
}
