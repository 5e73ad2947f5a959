use salary_model::{ChartKind, SeniorityLine};

use super::{ACCENT_COLOR, ensure_rows, group_means};
use crate::error::ChartError;
use crate::filter::FilteredView;

const LINE_WIDTH: f64 = 3.0;

/// Mean salary per seniority level, connected in grouping order.
pub fn build_seniority_line(view: &FilteredView<'_>) -> Result<SeniorityLine, ChartError> {
    ensure_rows(view, ChartKind::SeniorityLine)?;

    let points = group_means(
        view.iter()
            .map(|record| (record.seniority.as_str(), record.usd)),
    );

    Ok(SeniorityLine {
        title: "Salary by experience level".to_string(),
        points,
        color: ACCENT_COLOR.to_string(),
        line_width: LINE_WIDTH,
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::record;
    use super::*;

    #[test]
    fn one_point_per_seniority() {
        let records = [
            record("Data Engineer", "senior", "USA", "remoto", 150_000.0),
            record("Data Engineer", "junior", "USA", "remoto", 40_000.0),
            record("Data Engineer", "senior", "USA", "remoto", 110_000.0),
            record("Data Engineer", "executivo", "USA", "remoto", 250_000.0),
        ];
        let view: FilteredView<'_> = records.iter().collect();
        let line = build_seniority_line(&view).unwrap();

        let labels: Vec<&str> = line.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["executivo", "junior", "senior"]);
        assert_eq!(line.points[2].mean_usd, 130_000.0);
        assert_eq!(line.line_width, 3.0);
    }
}
