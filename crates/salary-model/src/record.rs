use serde::{Deserialize, Serialize};

/// Source column names as they appear in the salary CSV header.
pub mod columns {
    pub const YEAR: &str = "ano";
    pub const SENIORITY: &str = "senioridade";
    pub const CONTRACT: &str = "contrato";
    pub const COMPANY_SIZE: &str = "tamanho_empresa";
    pub const MODALITY: &str = "remoto";
    pub const JOB_TITLE: &str = "cargo";
    pub const RESIDENCE_ISO3: &str = "residencia_iso3";
    pub const USD: &str = "usd";
}

/// Columns that must be present for a CSV to load.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    columns::YEAR,
    columns::SENIORITY,
    columns::CONTRACT,
    columns::COMPANY_SIZE,
    columns::MODALITY,
    columns::JOB_TITLE,
    columns::RESIDENCE_ISO3,
    columns::USD,
];

/// One salary observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "senioridade")]
    pub seniority: String,
    #[serde(rename = "contrato")]
    pub contract: String,
    #[serde(rename = "tamanho_empresa")]
    pub company_size: String,
    /// Work modality (`remoto`, `presencial`, `hibrido`).
    #[serde(rename = "remoto")]
    pub modality: String,
    #[serde(rename = "cargo")]
    pub job_title: String,
    #[serde(rename = "residencia_iso3")]
    pub residence_iso3: String,
    /// Annual salary in USD.
    pub usd: f64,
    /// Values of the non-required CSV columns, aligned with
    /// [`Dataset::extra_columns`].
    #[serde(skip)]
    pub extra: Vec<String>,
}

/// The loaded salary table. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    records: Vec<SalaryRecord>,
    /// Headers of the CSV columns kept as untyped text, in file order.
    extra_columns: Vec<String>,
}

impl Dataset {
    pub fn new(records: Vec<SalaryRecord>) -> Self {
        Self {
            records,
            extra_columns: Vec::new(),
        }
    }

    /// A dataset whose records carry one `extra` value per entry of `extra_columns`.
    pub fn with_extra_columns(records: Vec<SalaryRecord>, extra_columns: Vec<String>) -> Self {
        Self {
            records,
            extra_columns,
        }
    }

    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }

    pub fn records(&self) -> &[SalaryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SalaryRecord> {
        self.records.iter()
    }
}

impl FromIterator<SalaryRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = SalaryRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a SalaryRecord;
    type IntoIter = std::slice::Iter<'a, SalaryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
