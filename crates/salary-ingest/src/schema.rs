//! Validation of a parsed CSV frame into typed salary records.

use std::collections::BTreeMap;

use polars::prelude::{Column, DataFrame};

use salary_common::{any_to_f64, any_to_i64, any_to_string, any_to_string_non_empty};
use salary_model::{Dataset, REQUIRED_COLUMNS, SalaryRecord, columns};

use crate::error::{IngestError, Result};

/// Maps each required column to the header actually present in the frame.
///
/// Header matching ignores surrounding whitespace and case. Extra columns are
/// allowed and ignored.
pub fn resolve_columns(df: &DataFrame, origin: &str) -> Result<BTreeMap<&'static str, String>> {
    let mut by_normalized: BTreeMap<String, String> = BTreeMap::new();
    for name in df.get_column_names() {
        let actual = name.to_string();
        by_normalized
            .entry(actual.trim().to_lowercase())
            .or_insert(actual);
    }

    let mut resolved = BTreeMap::new();
    for required in REQUIRED_COLUMNS {
        let Some(actual) = by_normalized.get(required) else {
            return Err(IngestError::MissingColumn {
                column: required.to_string(),
                origin: origin.to_string(),
            });
        };
        resolved.insert(required, actual.clone());
    }
    Ok(resolved)
}

/// Converts a parsed frame into a [`Dataset`], failing on the first bad cell.
pub fn dataset_from_frame(df: &DataFrame, origin: &str) -> Result<Dataset> {
    let resolved = resolve_columns(df, origin)?;
    if df.height() == 0 {
        return Err(IngestError::EmptyDataset {
            origin: origin.to_string(),
        });
    }

    let frame = FrameColumns::new(df, &resolved)?;
    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        records.push(frame.record(idx)?);
    }
    let extra_columns = frame.extra.iter().map(|c| c.name().to_string()).collect();
    Ok(Dataset::with_extra_columns(records, extra_columns))
}

struct FrameColumns<'a> {
    year: &'a Column,
    seniority: &'a Column,
    contract: &'a Column,
    company_size: &'a Column,
    modality: &'a Column,
    job_title: &'a Column,
    residence_iso3: &'a Column,
    usd: &'a Column,
    /// Columns outside the required set, kept as text for the detail table.
    extra: Vec<&'a Column>,
}

impl<'a> FrameColumns<'a> {
    fn new(df: &'a DataFrame, resolved: &BTreeMap<&'static str, String>) -> Result<Self> {
        let column = |name: &'static str| -> Result<&'a Column> {
            let actual = resolved
                .get(name)
                .ok_or_else(|| IngestError::DataFrame {
                    message: format!("column '{name}' was not resolved"),
                })?;
            Ok(df.column(actual.as_str())?)
        };
        Ok(Self {
            year: column(columns::YEAR)?,
            seniority: column(columns::SENIORITY)?,
            contract: column(columns::CONTRACT)?,
            company_size: column(columns::COMPANY_SIZE)?,
            modality: column(columns::MODALITY)?,
            job_title: column(columns::JOB_TITLE)?,
            residence_iso3: column(columns::RESIDENCE_ISO3)?,
            usd: column(columns::USD)?,
            extra: df
                .get_columns()
                .iter()
                .filter(|c| !resolved.values().any(|name| name.as_str() == c.name().as_str()))
                .collect(),
        })
    }

    fn record(&self, idx: usize) -> Result<SalaryRecord> {
        Ok(SalaryRecord {
            year: year_cell(self.year, idx)?,
            seniority: text_cell(self.seniority, columns::SENIORITY, idx)?,
            contract: text_cell(self.contract, columns::CONTRACT, idx)?,
            company_size: text_cell(self.company_size, columns::COMPANY_SIZE, idx)?,
            modality: text_cell(self.modality, columns::MODALITY, idx)?,
            job_title: text_cell(self.job_title, columns::JOB_TITLE, idx)?,
            residence_iso3: text_cell(self.residence_iso3, columns::RESIDENCE_ISO3, idx)?,
            usd: usd_cell(self.usd, idx)?,
            extra: self
                .extra
                .iter()
                .map(|column| -> Result<String> { Ok(any_to_string(column.get(idx)?)) })
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

/// Row numbers in errors are 1-based data rows (the header is not counted).
fn text_cell(column: &Column, name: &str, idx: usize) -> Result<String> {
    any_to_string_non_empty(column.get(idx)?).ok_or_else(|| IngestError::MissingValue {
        column: name.to_string(),
        row: idx + 1,
    })
}

fn year_cell(column: &Column, idx: usize) -> Result<i32> {
    let value = column.get(idx)?;
    let raw = any_to_string(value.clone());
    if raw.trim().is_empty() {
        return Err(IngestError::MissingValue {
            column: columns::YEAR.to_string(),
            row: idx + 1,
        });
    }
    any_to_i64(value)
        .and_then(|year| i32::try_from(year).ok())
        .ok_or_else(|| IngestError::InvalidValue {
            column: columns::YEAR.to_string(),
            row: idx + 1,
            value: raw,
        })
}

fn usd_cell(column: &Column, idx: usize) -> Result<f64> {
    let value = column.get(idx)?;
    let raw = any_to_string(value.clone());
    if raw.trim().is_empty() {
        return Err(IngestError::MissingValue {
            column: columns::USD.to_string(),
            row: idx + 1,
        });
    }
    any_to_f64(value).ok_or_else(|| IngestError::InvalidValue {
        column: columns::USD.to_string(),
        row: idx + 1,
        value: raw,
    })
}
