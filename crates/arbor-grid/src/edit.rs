//! Application of external cell-edit batches.
//!
//! The grid widget reports edits as whole-cell replacements. Edits to the
//! tree cell's structural fields come through this path too (toggling
//! expand/collapse is just a cell edit), so the caller must re-index and
//! re-project after applying a batch.

use tracing::warn;

use crate::cell::Cell;
use crate::column::{Column, column_position};
use crate::row::{Row, RowId};

/// One cell-edit event from the grid widget.
#[derive(Debug, Clone, PartialEq)]
pub struct CellEdit {
    /// Target row.
    pub row_id: RowId,
    /// Target column, resolved against the grid's column list.
    pub column_id: String,
    /// Replacement cell.
    pub cell: Cell,
}

impl CellEdit {
    /// Creates a cell edit.
    pub fn new(row_id: RowId, column_id: impl Into<String>, cell: Cell) -> Self {
        Self {
            row_id,
            column_id: column_id.into(),
            cell,
        }
    }
}

/// Applies a batch of edits in input order; later edits to the same cell
/// overwrite earlier ones. Edits naming an unknown row, an unknown column,
/// or a cell position the row doesn't have are skipped with a warning;
/// the rest of the batch still applies.
pub fn apply_edits(rows: &[Row], columns: &[Column], edits: &[CellEdit]) -> Vec<Row> {
    let mut next = rows.to_vec();
    for edit in edits {
        let Some(row_pos) = next.iter().position(|r| r.row_id == edit.row_id) else {
            warn!(row = %edit.row_id, "cell edit targets unknown row, skipping");
            continue;
        };
        let Some(col_pos) = column_position(columns, &edit.column_id) else {
            warn!(column = %edit.column_id, "cell edit targets unknown column, skipping");
            continue;
        };
        let Some(cell) = next[row_pos].cells.get_mut(col_pos) else {
            warn!(row = %edit.row_id, column = %edit.column_id, "row has no cell in that column, skipping");
            continue;
        };
        *cell = edit.cell.clone();
    }
    next
}
