use salary_model::{ChartKind, TitleRanking};

use super::{ACCENT_COLOR, ensure_rows, group_means};
use crate::error::ChartError;
use crate::filter::FilteredView;

/// The `limit` job titles with the highest mean salary, ascending by mean.
///
/// Titles tied on mean keep their alphabetical order when selecting the top
/// groups.
pub fn build_title_ranking(
    view: &FilteredView<'_>,
    limit: usize,
) -> Result<TitleRanking, ChartError> {
    ensure_rows(view, ChartKind::TitleRanking)?;

    let mut groups = group_means(
        view.iter()
            .map(|record| (record.job_title.as_str(), record.usd)),
    );
    // stable sort: equal means stay in key order
    groups.sort_by(|a, b| b.mean_usd.total_cmp(&a.mean_usd));
    groups.truncate(limit);
    groups.reverse();

    Ok(TitleRanking {
        title: format!("Top {limit} average salaries by job title"),
        bars: groups,
        color: ACCENT_COLOR.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::record;
    use super::*;

    #[test]
    fn keeps_highest_means_in_ascending_order() {
        let records: Vec<_> = (0..12_i32)
            .map(|idx| {
                record(
                    &format!("Title {idx:02}"),
                    "senior",
                    "USA",
                    "remoto",
                    f64::from(idx) * 1_000.0,
                )
            })
            .collect();
        let view: FilteredView<'_> = records.iter().collect();
        let ranking = build_title_ranking(&view, 10).unwrap();

        assert_eq!(ranking.bars.len(), 10);
        assert_eq!(ranking.bars[0].label, "Title 02");
        assert_eq!(ranking.bars[9].label, "Title 11");
        assert!(
            ranking
                .bars
                .windows(2)
                .all(|pair| pair[0].mean_usd <= pair[1].mean_usd)
        );
    }

    #[test]
    fn averages_within_a_title() {
        let records = [
            record("Data Engineer", "senior", "USA", "remoto", 100_000.0),
            record("Data Engineer", "junior", "USA", "remoto", 50_000.0),
            record("Data Analyst", "junior", "USA", "remoto", 90_000.0),
        ];
        let view: FilteredView<'_> = records.iter().collect();
        let ranking = build_title_ranking(&view, 10).unwrap();
        let labels: Vec<&str> = ranking.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Data Engineer", "Data Analyst"]);
        assert_eq!(ranking.bars[0].mean_usd, 75_000.0);
    }
}
