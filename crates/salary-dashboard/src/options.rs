//! Distinct filter values offered for each column.

use std::collections::BTreeSet;

use salary_model::{Dataset, FilterOptions};

/// Collects the sorted distinct values of the five filter columns.
pub fn filter_options(dataset: &Dataset) -> FilterOptions {
    let mut years = BTreeSet::new();
    let mut seniorities = BTreeSet::new();
    let mut contracts = BTreeSet::new();
    let mut company_sizes = BTreeSet::new();
    let mut modalities = BTreeSet::new();

    for record in dataset {
        years.insert(record.year);
        seniorities.insert(record.seniority.as_str());
        contracts.insert(record.contract.as_str());
        company_sizes.insert(record.company_size.as_str());
        modalities.insert(record.modality.as_str());
    }

    FilterOptions {
        years: years.into_iter().collect(),
        seniorities: owned(seniorities),
        contracts: owned(contracts),
        company_sizes: owned(company_sizes),
        modalities: owned(modalities),
    }
}

fn owned(values: BTreeSet<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}
