//! Conjunctive row filter over the dataset.

use serde::Serialize;
use tracing::debug;

use salary_model::{Dataset, FilterSelection, SalaryRecord};

/// Records of the dataset that pass the current selection, in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilteredView<'a> {
    rows: Vec<&'a SalaryRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn rows(&self) -> &[&'a SalaryRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a SalaryRecord> + '_ {
        self.rows.iter().copied()
    }

    /// Salary values of the view, in row order.
    pub fn salaries(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|record| record.usd)
    }
}

impl<'a> FromIterator<&'a SalaryRecord> for FilteredView<'a> {
    fn from_iter<I: IntoIterator<Item = &'a SalaryRecord>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Keeps records whose year, seniority, contract, company size and modality
/// are all selected. An empty set on any column yields an empty view.
pub fn apply_filters<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    if selection.excludes_everything() {
        debug!("a filter column has no values selected");
        return FilteredView { rows: Vec::new() };
    }
    let view: FilteredView<'a> = dataset
        .iter()
        .filter(|record| selection.matches(record))
        .collect();
    debug!(
        total = dataset.len(),
        matched = view.len(),
        "filters applied"
    );
    view
}
