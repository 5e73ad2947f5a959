use serde_json::{Value, json};

use salary_model::{ModalityPie, SalaryHistogram, SeniorityLine, TitleRanking};

use super::{USD_FORMAT, usd_axis};

pub(super) fn title_ranking(ranking: &TitleRanking) -> Value {
    let values: Vec<Value> = ranking
        .bars
        .iter()
        .map(|bar| json!({ "label": bar.label, "mean_usd": bar.mean_usd, "count": bar.count }))
        .collect();
    json!({
        "width": "container",
        "data": { "values": values },
        "mark": { "type": "bar", "color": ranking.color },
        "encoding": {
            "x": {
                "field": "mean_usd",
                "type": "quantitative",
                "axis": usd_axis("Mean salary (USD)")
            },
            "y": {
                "field": "label",
                "type": "nominal",
                "sort": "-x",
                "title": "Job title"
            },
            "tooltip": [
                { "field": "label", "type": "nominal", "title": "Job title" },
                { "field": "mean_usd", "type": "quantitative", "title": "Mean", "format": USD_FORMAT },
                { "field": "count", "type": "quantitative", "title": "Records" }
            ]
        }
    })
}

/// Bins are drawn pre-aggregated; the bar gap shrinks each bar about its
/// centre so `start`/`end` stay exact for tooltips.
pub(super) fn salary_histogram(histogram: &SalaryHistogram) -> Value {
    let inset = histogram.bar_gap.clamp(0.0, 1.0) / 2.0;
    let values: Vec<Value> = histogram
        .bins
        .iter()
        .map(|bin| {
            let width = bin.end - bin.start;
            json!({
                "start": bin.start,
                "end": bin.end,
                "bar_start": bin.start + width * inset,
                "bar_end": bin.end - width * inset,
                "count": bin.count,
            })
        })
        .collect();
    json!({
        "width": "container",
        "data": { "values": values },
        "mark": { "type": "bar", "color": histogram.color },
        "encoding": {
            "x": {
                "field": "bar_start",
                "type": "quantitative",
                "axis": usd_axis("Annual salary (USD)")
            },
            "x2": { "field": "bar_end" },
            "y": { "field": "count", "type": "quantitative", "title": "Records" },
            "tooltip": [
                { "field": "start", "type": "quantitative", "title": "From", "format": USD_FORMAT },
                { "field": "end", "type": "quantitative", "title": "To", "format": USD_FORMAT },
                { "field": "count", "type": "quantitative", "title": "Records" }
            ]
        }
    })
}

pub(super) fn modality_pie(pie: &ModalityPie) -> Value {
    let values: Vec<Value> = pie
        .slices
        .iter()
        .enumerate()
        .map(|(order, slice)| {
            json!({
                "label": slice.label,
                "count": slice.count,
                "share": slice.share,
                "order": order,
            })
        })
        .collect();
    let domain: Vec<&str> = pie.slices.iter().map(|slice| slice.label.as_str()).collect();
    let range: Vec<&str> = pie.slices.iter().map(|slice| slice.color.as_str()).collect();
    json!({
        "data": { "values": values },
        "mark": { "type": "arc", "innerRadius": 0 },
        "encoding": {
            "theta": { "field": "count", "type": "quantitative", "stack": true },
            "order": { "field": "order", "type": "ordinal" },
            "color": {
                "field": "label",
                "type": "nominal",
                "title": "Modality",
                "scale": { "domain": domain, "range": range }
            },
            "tooltip": [
                { "field": "label", "type": "nominal", "title": "Modality" },
                { "field": "count", "type": "quantitative", "title": "Records" },
                { "field": "share", "type": "quantitative", "title": "Share", "format": ".1%" }
            ]
        }
    })
}

pub(super) fn seniority_line(line: &SeniorityLine) -> Value {
    let values: Vec<Value> = line
        .points
        .iter()
        .map(|point| json!({ "label": point.label, "mean_usd": point.mean_usd, "count": point.count }))
        .collect();
    json!({
        "width": "container",
        "data": { "values": values },
        "mark": {
            "type": "line",
            "point": true,
            "color": line.color,
            "strokeWidth": line.line_width
        },
        "encoding": {
            "x": { "field": "label", "type": "ordinal", "sort": null, "title": "Experience level" },
            "y": {
                "field": "mean_usd",
                "type": "quantitative",
                "axis": usd_axis("Mean salary (USD)")
            },
            "tooltip": [
                { "field": "label", "type": "ordinal", "title": "Experience level" },
                { "field": "mean_usd", "type": "quantitative", "title": "Mean", "format": USD_FORMAT }
            ]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use salary_model::{GroupMean, HistogramBin, PieSlice};

    #[test]
    fn ranking_puts_largest_bar_on_top() {
        let ranking = TitleRanking {
            title: "Top 10 average salaries by job title".to_string(),
            bars: vec![
                GroupMean {
                    label: "Data Analyst".to_string(),
                    mean_usd: 30_000.0,
                    count: 1,
                },
                GroupMean {
                    label: "Data Scientist".to_string(),
                    mean_usd: 150_000.0,
                    count: 1,
                },
            ],
            color: "#B9332C".to_string(),
        };
        let value = title_ranking(&ranking);
        assert_eq!(value["mark"]["type"], "bar");
        assert_eq!(value["encoding"]["y"]["sort"], "-x");
        assert_eq!(value["data"]["values"][1]["label"], "Data Scientist");
    }

    #[test]
    fn histogram_applies_bar_gap_inside_each_bin() {
        let histogram = SalaryHistogram {
            title: "Salary distribution".to_string(),
            bins: vec![HistogramBin {
                start: 0.0,
                end: 100.0,
                count: 3,
            }],
            bar_gap: 0.2,
            color: "#B9332C".to_string(),
        };
        let value = histogram_values(&histogram);
        assert_eq!(value["start"], 0.0);
        assert_eq!(value["end"], 100.0);
        assert_eq!(value["bar_start"], 10.0);
        assert_eq!(value["bar_end"], 90.0);
        assert_eq!(value["count"], 3);
    }

    fn histogram_values(histogram: &SalaryHistogram) -> Value {
        salary_histogram(histogram)["data"]["values"][0].clone()
    }

    #[test]
    fn pie_colours_follow_slice_order() {
        let pie = ModalityPie {
            title: "Work modality".to_string(),
            slices: vec![
                PieSlice {
                    label: "remoto".to_string(),
                    count: 3,
                    share: 0.75,
                    color: "#8A2723".to_string(),
                },
                PieSlice {
                    label: "presencial".to_string(),
                    count: 1,
                    share: 0.25,
                    color: "#B9332C".to_string(),
                },
            ],
        };
        let value = modality_pie(&pie);
        let scale = &value["encoding"]["color"]["scale"];
        assert_eq!(scale["domain"], json!(["remoto", "presencial"]));
        assert_eq!(scale["range"], json!(["#8A2723", "#B9332C"]));
        assert_eq!(value["mark"]["type"], "arc");
    }

    #[test]
    fn line_keeps_category_order() {
        let line = SeniorityLine {
            title: "Salary by experience level".to_string(),
            points: vec![
                GroupMean {
                    label: "junior".to_string(),
                    mean_usd: 30_000.0,
                    count: 1,
                },
                GroupMean {
                    label: "senior".to_string(),
                    mean_usd: 150_000.0,
                    count: 1,
                },
            ],
            color: "#B9332C".to_string(),
            line_width: 3.0,
        };
        let value = seniority_line(&line);
        assert_eq!(value["encoding"]["x"]["sort"], Value::Null);
        assert_eq!(value["mark"]["strokeWidth"], 3.0);
        assert_eq!(value["data"]["values"][0]["label"], "junior");
    }
}
