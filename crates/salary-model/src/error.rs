use thiserror::Error;

use crate::filter::FilterColumn;

/// Errors raised while building a filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Value is not one of the distinct values present in the dataset.
    #[error("'{value}' is not a known {column} value")]
    UnknownValue { column: FilterColumn, value: String },

    /// Year filter value is not an integer.
    #[error("invalid year '{value}'")]
    InvalidYear { value: String },

    /// Column name does not match any filterable column.
    #[error("unknown filter column '{name}'")]
    UnknownColumn { name: String },
}

pub type Result<T> = std::result::Result<T, SelectionError>;
