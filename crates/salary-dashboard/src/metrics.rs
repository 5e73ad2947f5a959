//! Scalar summaries of the filtered view.

use std::collections::HashMap;

use salary_model::MetricsSummary;

use crate::filter::FilteredView;

/// Computes mean, max, count and most frequent job title.
///
/// An empty view yields [`MetricsSummary::default`]. Job titles tied on
/// frequency resolve to the one that appears first in the view.
pub fn compute_metrics(view: &FilteredView<'_>) -> MetricsSummary {
    if view.is_empty() {
        return MetricsSummary::default();
    }

    let count = view.len();
    let total: f64 = view.salaries().sum();
    let max_usd = view.salaries().fold(f64::NEG_INFINITY, f64::max);

    MetricsSummary {
        mean_usd: total / count as f64,
        max_usd,
        count,
        top_job_title: most_frequent_title(view),
    }
}

fn most_frequent_title(view: &FilteredView<'_>) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for record in view.iter() {
        let title = record.job_title.as_str();
        let count = counts.entry(title).or_insert_with(|| {
            first_seen.push(title);
            0
        });
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for title in first_seen {
        let count = counts.get(title).copied().unwrap_or(0);
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((title, count)),
        }
    }
    best.map(|(title, _)| title.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use salary_model::SalaryRecord;

    fn record(title: &str, usd: f64) -> SalaryRecord {
        SalaryRecord {
            year: 2024,
            seniority: "senior".to_string(),
            contract: "integral".to_string(),
            company_size: "grande".to_string(),
            modality: "remoto".to_string(),
            job_title: title.to_string(),
            residence_iso3: "USA".to_string(),
            usd,
            extra: Vec::new(),
        }
    }

    #[test]
    fn empty_view_gives_zero_state() {
        let view: FilteredView<'_> = std::iter::empty().collect();
        assert_eq!(compute_metrics(&view), MetricsSummary::default());
    }

    #[test]
    fn mean_max_count_and_mode() {
        let records = [
            record("Data Analyst", 40_000.0),
            record("Data Engineer", 100_000.0),
            record("Data Engineer", 130_000.0),
            record("Data Analyst", 50_000.0),
            record("Data Engineer", 80_000.0),
        ];
        let view: FilteredView<'_> = records.iter().collect();
        let metrics = compute_metrics(&view);
        assert_eq!(metrics.count, 5);
        assert_eq!(metrics.mean_usd, 80_000.0);
        assert_eq!(metrics.max_usd, 130_000.0);
        assert_eq!(metrics.top_job_title, "Data Engineer");
    }

    #[test]
    fn ties_resolve_to_first_encountered() {
        let records = [
            record("Research Scientist", 1.0),
            record("Analytics Engineer", 2.0),
            record("Analytics Engineer", 3.0),
            record("Research Scientist", 4.0),
        ];
        let view: FilteredView<'_> = records.iter().collect();
        assert_eq!(compute_metrics(&view).top_job_title, "Research Scientist");
    }
}
