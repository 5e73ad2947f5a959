use thiserror::Error;

use salary_model::ChartKind;

/// Reasons a chart could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The filtered view has no rows to aggregate.
    #[error("cannot build {kind}: no records match the current filters")]
    EmptyView { kind: ChartKind },
}

impl ChartError {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartError::EmptyView { kind } => *kind,
        }
    }
}
