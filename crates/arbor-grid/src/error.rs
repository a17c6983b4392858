//! Error types for tree-grid operations.

use crate::row::RowId;

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while indexing or mutating the row tree.
///
/// Structural errors (`MissingParent`, `CycleDetected`, `MissingTreeCell`)
/// fail closed: the mutation that produced the broken sequence is discarded
/// and the previous valid sequence stays in place. Lookup errors
/// (`RowNotFound`, `ColumnNotFound`) make the attempted operation a no-op.
/// No variant is fatal to the caller.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A row's parent reference names a row that is not in the store.
    #[error("row {row} references missing parent {parent}")]
    MissingParent { row: RowId, parent: RowId },

    /// Following parent links from a row never reaches a root.
    #[error("cycle detected in parent links involving row {row}")]
    CycleDetected { row: RowId },

    /// A data row has no tree cell in the designated column.
    #[error("row {0} has no tree cell")]
    MissingTreeCell(RowId),

    /// An operation referenced a row that is not in the store.
    #[error("row {0} not found")]
    RowNotFound(RowId),

    /// An edit referenced a column that does not exist.
    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    /// The selection shape is not supported by the requested operation.
    #[error("invalid selection: {reason}")]
    InvalidSelection { reason: String },
}

impl GridError {
    /// Create an invalid-selection error.
    pub fn invalid_selection(reason: impl Into<String>) -> Self {
        Self::InvalidSelection {
            reason: reason.into(),
        }
    }
}
