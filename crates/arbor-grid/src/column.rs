//! Column definitions and header-row synthesis.

use crate::cell::Cell;
use crate::row::{Row, RowId};

/// One column of the grid.
///
/// Columns are fixed at construction; column 0 is the tree column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Unique column identifier, referenced by cell edits.
    pub column_id: String,
    /// Column width hint for the rendering widget.
    pub width: u32,
    /// Whether the rendering widget may offer resizing.
    pub resizable: bool,
    /// Whether the rendering widget may offer column reordering.
    pub reorderable: bool,
}

impl Column {
    /// Creates a column with the given identifier and width.
    pub fn new(column_id: impl Into<String>, width: u32) -> Self {
        Self {
            column_id: column_id.into(),
            width,
            resizable: false,
            reorderable: false,
        }
    }

    /// Sets whether the column is resizable.
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Sets whether the column is reorderable.
    pub fn with_reorderable(mut self, reorderable: bool) -> Self {
        self.reorderable = reorderable;
        self
    }
}

/// Returns the position of a column by identifier.
pub fn column_position(columns: &[Column], column_id: &str) -> Option<usize> {
    columns.iter().position(|c| c.column_id == column_id)
}

/// Builds the synthetic header row from the column captions.
///
/// The header row always renders first, is never reorderable, and is never
/// subject to tree logic.
pub fn header_row(columns: &[Column]) -> Row {
    let cells = columns
        .iter()
        .map(|c| Cell::Header {
            text: c.column_id.clone(),
        })
        .collect();
    Row::with_id(RowId::HEADER, cells).with_reorderable(false)
}
