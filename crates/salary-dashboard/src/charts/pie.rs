use std::collections::HashMap;

use salary_model::{ChartKind, ModalityPie, PieSlice};

use super::ensure_rows;
use crate::error::ChartError;
use crate::filter::FilteredView;

/// Colour for modality values outside the fixed palette.
pub const DEFAULT_SLICE_COLOR: &str = "#9E9E9E";

/// Fixed colour for each known work modality.
pub fn modality_color(modality: &str) -> &'static str {
    match modality {
        "remoto" => "#8A2723",
        "presencial" => "#B9332C",
        "hibrido" => "#D94A44",
        _ => DEFAULT_SLICE_COLOR,
    }
}

/// Row counts per work modality, largest first.
pub fn build_modality_pie(view: &FilteredView<'_>) -> Result<ModalityPie, ChartError> {
    ensure_rows(view, ChartKind::ModalityPie)?;

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in view.iter() {
        let modality = record.modality.as_str();
        *counts.entry(modality).or_insert_with(|| {
            order.push(modality);
            0
        }) += 1;
    }
    // stable sort keeps first-encountered order among equal counts
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));

    let total = view.len() as f64;
    let slices = order
        .into_iter()
        .map(|label| {
            let count = counts[label];
            PieSlice {
                label: label.to_string(),
                count,
                share: count as f64 / total,
                color: modality_color(label).to_string(),
            }
        })
        .collect();

    Ok(ModalityPie {
        title: "Work modality".to_string(),
        slices,
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::record;
    use super::*;

    #[test]
    fn counts_and_colors_per_modality() {
        let records = [
            record("Data Engineer", "senior", "USA", "presencial", 1.0),
            record("Data Engineer", "senior", "USA", "remoto", 1.0),
            record("Data Engineer", "senior", "USA", "remoto", 1.0),
            record("Data Engineer", "senior", "USA", "hibrido", 1.0),
        ];
        let view: FilteredView<'_> = records.iter().collect();
        let pie = build_modality_pie(&view).unwrap();

        let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["remoto", "presencial", "hibrido"]);
        assert_eq!(pie.slices[0].count, 2);
        assert_eq!(pie.slices[0].share, 0.5);
        assert_eq!(pie.slices[0].color, "#8A2723");
        assert_eq!(pie.slices[1].color, "#B9332C");
        assert_eq!(pie.slices[2].color, "#D94A44");
    }

    #[test]
    fn unknown_modality_gets_default_color() {
        assert_eq!(modality_color("nomade"), DEFAULT_SLICE_COLOR);
    }
}
