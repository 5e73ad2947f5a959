//! Filter columns, available options, and the user's current selection.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectionError};
use crate::record::{SalaryRecord, columns};

/// The five columns exposed as sidebar filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterColumn {
    Year,
    Seniority,
    Contract,
    CompanySize,
    Modality,
}

impl FilterColumn {
    pub const ALL: [FilterColumn; 5] = [
        FilterColumn::Year,
        FilterColumn::Seniority,
        FilterColumn::Contract,
        FilterColumn::CompanySize,
        FilterColumn::Modality,
    ];

    /// Source CSV column backing this filter.
    pub fn column_name(self) -> &'static str {
        match self {
            FilterColumn::Year => columns::YEAR,
            FilterColumn::Seniority => columns::SENIORITY,
            FilterColumn::Contract => columns::CONTRACT,
            FilterColumn::CompanySize => columns::COMPANY_SIZE,
            FilterColumn::Modality => columns::MODALITY,
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            FilterColumn::Year => "Year",
            FilterColumn::Seniority => "Experience level",
            FilterColumn::Contract => "Contract",
            FilterColumn::CompanySize => "Company size",
            FilterColumn::Modality => "Work modality",
        }
    }

    /// The record's value for this column, rendered as text.
    pub fn value_of(self, record: &SalaryRecord) -> String {
        match self {
            FilterColumn::Year => record.year.to_string(),
            FilterColumn::Seniority => record.seniority.clone(),
            FilterColumn::Contract => record.contract.clone(),
            FilterColumn::CompanySize => record.company_size.clone(),
            FilterColumn::Modality => record.modality.clone(),
        }
    }
}

impl fmt::Display for FilterColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterColumn::Year => "year",
            FilterColumn::Seniority => "seniority",
            FilterColumn::Contract => "contract",
            FilterColumn::CompanySize => "company-size",
            FilterColumn::Modality => "modality",
        };
        f.write_str(name)
    }
}

impl FromStr for FilterColumn {
    type Err = SelectionError;

    /// Accepts the display name, the snake_case name, or the CSV column name.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "year" | "ano" => Ok(FilterColumn::Year),
            "seniority" | "senioridade" => Ok(FilterColumn::Seniority),
            "contract" | "contrato" => Ok(FilterColumn::Contract),
            "company_size" | "tamanho_empresa" => Ok(FilterColumn::CompanySize),
            "modality" | "remoto" => Ok(FilterColumn::Modality),
            _ => Err(SelectionError::UnknownColumn {
                name: s.to_string(),
            }),
        }
    }
}

/// Sorted distinct values available for each filter column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub seniorities: Vec<String>,
    pub contracts: Vec<String>,
    pub company_sizes: Vec<String>,
    pub modalities: Vec<String>,
}

impl FilterOptions {
    /// The default selection: every available value of every column.
    pub fn select_all(&self) -> FilterSelection {
        FilterSelection {
            years: self.years.iter().copied().collect(),
            seniorities: self.seniorities.iter().cloned().collect(),
            contracts: self.contracts.iter().cloned().collect(),
            company_sizes: self.company_sizes.iter().cloned().collect(),
            modalities: self.modalities.iter().cloned().collect(),
        }
    }

    /// Available values for `column`, rendered as text.
    pub fn values(&self, column: FilterColumn) -> Vec<String> {
        match column {
            FilterColumn::Year => self.years.iter().map(ToString::to_string).collect(),
            FilterColumn::Seniority => self.seniorities.clone(),
            FilterColumn::Contract => self.contracts.clone(),
            FilterColumn::CompanySize => self.company_sizes.clone(),
            FilterColumn::Modality => self.modalities.clone(),
        }
    }

    fn contains_text(&self, column: FilterColumn, value: &str) -> bool {
        match column {
            FilterColumn::Year => value
                .parse::<i32>()
                .is_ok_and(|year| self.years.contains(&year)),
            FilterColumn::Seniority => self.seniorities.iter().any(|v| v == value),
            FilterColumn::Contract => self.contracts.iter().any(|v| v == value),
            FilterColumn::CompanySize => self.company_sizes.iter().any(|v| v == value),
            FilterColumn::Modality => self.modalities.iter().any(|v| v == value),
        }
    }
}

/// Selected values per filter column.
///
/// A record passes when each of its five filtered attributes is in the
/// matching set. An empty set matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub years: BTreeSet<i32>,
    pub seniorities: BTreeSet<String>,
    pub contracts: BTreeSet<String>,
    pub company_sizes: BTreeSet<String>,
    pub modalities: BTreeSet<String>,
}

impl FilterSelection {
    pub fn matches(&self, record: &SalaryRecord) -> bool {
        self.years.contains(&record.year)
            && self.seniorities.contains(&record.seniority)
            && self.contracts.contains(&record.contract)
            && self.company_sizes.contains(&record.company_size)
            && self.modalities.contains(&record.modality)
    }

    /// Replaces the selected values for one column.
    ///
    /// Year values must parse as integers; other columns take the text as-is.
    pub fn select<I, S>(&mut self, column: FilterColumn, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match column {
            FilterColumn::Year => {
                let mut years = BTreeSet::new();
                for value in values {
                    let raw = value.as_ref().trim();
                    let year = raw.parse::<i32>().map_err(|_| SelectionError::InvalidYear {
                        value: raw.to_string(),
                    })?;
                    years.insert(year);
                }
                self.years = years;
            }
            FilterColumn::Seniority => self.seniorities = text_set(values),
            FilterColumn::Contract => self.contracts = text_set(values),
            FilterColumn::CompanySize => self.company_sizes = text_set(values),
            FilterColumn::Modality => self.modalities = text_set(values),
        }
        Ok(())
    }

    /// Deselects every value of one column.
    pub fn clear(&mut self, column: FilterColumn) {
        match column {
            FilterColumn::Year => self.years.clear(),
            FilterColumn::Seniority => self.seniorities.clear(),
            FilterColumn::Contract => self.contracts.clear(),
            FilterColumn::CompanySize => self.company_sizes.clear(),
            FilterColumn::Modality => self.modalities.clear(),
        }
    }

    /// Selected values for `column`, rendered as text in sorted order.
    pub fn values(&self, column: FilterColumn) -> Vec<String> {
        match column {
            FilterColumn::Year => self.years.iter().map(ToString::to_string).collect(),
            FilterColumn::Seniority => self.seniorities.iter().cloned().collect(),
            FilterColumn::Contract => self.contracts.iter().cloned().collect(),
            FilterColumn::CompanySize => self.company_sizes.iter().cloned().collect(),
            FilterColumn::Modality => self.modalities.iter().cloned().collect(),
        }
    }

    pub fn is_empty_for(&self, column: FilterColumn) -> bool {
        match column {
            FilterColumn::Year => self.years.is_empty(),
            FilterColumn::Seniority => self.seniorities.is_empty(),
            FilterColumn::Contract => self.contracts.is_empty(),
            FilterColumn::CompanySize => self.company_sizes.is_empty(),
            FilterColumn::Modality => self.modalities.is_empty(),
        }
    }

    /// True when some column has nothing selected, so no record can match.
    pub fn excludes_everything(&self) -> bool {
        FilterColumn::ALL
            .iter()
            .any(|column| self.is_empty_for(*column))
    }

    /// Checks that every selected value exists in `options`.
    pub fn validate(&self, options: &FilterOptions) -> Result<()> {
        for column in FilterColumn::ALL {
            for value in self.values(column) {
                if !options.contains_text(column, &value) {
                    return Err(SelectionError::UnknownValue { column, value });
                }
            }
        }
        Ok(())
    }
}

fn text_set<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| value.as_ref().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SalaryRecord {
        SalaryRecord {
            year: 2023,
            seniority: "senior".to_string(),
            contract: "integral".to_string(),
            company_size: "grande".to_string(),
            modality: "remoto".to_string(),
            job_title: "Data Scientist".to_string(),
            residence_iso3: "USA".to_string(),
            usd: 150_000.0,
            extra: Vec::new(),
        }
    }

    fn options() -> FilterOptions {
        FilterOptions {
            years: vec![2023, 2024],
            seniorities: vec!["junior".to_string(), "senior".to_string()],
            contracts: vec!["integral".to_string()],
            company_sizes: vec!["grande".to_string(), "media".to_string()],
            modalities: vec!["presencial".to_string(), "remoto".to_string()],
        }
    }

    #[test]
    fn select_all_matches_record() {
        let selection = options().select_all();
        assert!(selection.matches(&record()));
        assert!(!selection.excludes_everything());
    }

    #[test]
    fn cleared_column_matches_nothing() {
        let mut selection = options().select_all();
        selection.clear(FilterColumn::Modality);
        assert!(selection.excludes_everything());
        assert!(!selection.matches(&record()));
    }

    #[test]
    fn select_parses_years() {
        let mut selection = options().select_all();
        selection
            .select(FilterColumn::Year, ["2024"])
            .expect("select year");
        assert_eq!(selection.years, BTreeSet::from([2024]));
        assert!(!selection.matches(&record()));

        let err = selection
            .select(FilterColumn::Year, ["last year"])
            .unwrap_err();
        assert_eq!(
            err,
            SelectionError::InvalidYear {
                value: "last year".to_string()
            }
        );
    }

    #[test]
    fn validate_rejects_unknown_value() {
        let mut selection = options().select_all();
        selection
            .select(FilterColumn::Seniority, ["executivo"])
            .expect("select seniority");
        let err = selection.validate(&options()).unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnknownValue {
                column: FilterColumn::Seniority,
                value: "executivo".to_string()
            }
        );
        assert_eq!(err.to_string(), "'executivo' is not a known seniority value");
    }

    #[test]
    fn column_parses_from_csv_and_display_names() {
        assert_eq!("company-size".parse::<FilterColumn>(), Ok(FilterColumn::CompanySize));
        assert_eq!("tamanho_empresa".parse::<FilterColumn>(), Ok(FilterColumn::CompanySize));
        assert_eq!("ANO".parse::<FilterColumn>(), Ok(FilterColumn::Year));
        assert!("salary".parse::<FilterColumn>().is_err());
    }
}
