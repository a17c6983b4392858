//! Row identity and the flat row type.
//!
//! Rows are the only entities in the model; the tree between them is
//! implicit in each row's parent back-reference (see [`TreeCell`]) and in
//! the order of the row sequence. There is no separate children container.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::cell::{Cell, TreeCell};

/// Counter for generating unique row IDs.
static ROW_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Default row height in logical pixels, matching the grid widget's rows.
pub const DEFAULT_ROW_HEIGHT: f32 = 25.0;

/// Stable identity of a row for the lifetime of the tree.
///
/// IDs are never reused while the row exists. Fresh IDs come from a
/// process-wide atomic counter; uniqueness is the only guarantee, not
/// ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    /// Reserved ID of the synthetic header row, outside the generator's range.
    pub const HEADER: RowId = RowId(0);

    /// Returns a fresh, globally unique row ID.
    pub fn next() -> RowId {
        RowId(ROW_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the numeric value of this ID.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entity in the flat, tree-backed row list.
///
/// A row's position in the sequence determines sibling order. Data rows
/// carry a [`Cell::Tree`] in column 0; the synthetic header row carries
/// [`Cell::Header`] cells and is never subject to tree logic.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Unique, stable identity.
    pub row_id: RowId,
    /// Row height hint for the rendering widget.
    pub height: f32,
    /// Whether the rendering widget may offer drag-reordering for this row.
    pub reorderable: bool,
    /// Ordered cells; column 0 of a data row is the tree cell.
    pub cells: Vec<Cell>,
}

impl Row {
    /// Creates a data row with a fresh ID and the given cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            row_id: RowId::next(),
            height: DEFAULT_ROW_HEIGHT,
            reorderable: true,
            cells,
        }
    }

    /// Creates a row with an explicit ID (used for the header row).
    pub fn with_id(row_id: RowId, cells: Vec<Cell>) -> Self {
        Self {
            row_id,
            height: DEFAULT_ROW_HEIGHT,
            reorderable: true,
            cells,
        }
    }

    /// Sets whether the row is reorderable.
    pub fn with_reorderable(mut self, reorderable: bool) -> Self {
        self.reorderable = reorderable;
        self
    }

    /// Searches this row's cells for its tree cell.
    pub fn tree_cell(&self) -> Option<&TreeCell> {
        self.cells.iter().find_map(Cell::as_tree)
    }

    /// Mutable access to this row's tree cell.
    pub fn tree_cell_mut(&mut self) -> Option<&mut TreeCell> {
        self.cells.iter_mut().find_map(Cell::as_tree_mut)
    }

    /// The parent back-reference, if this row has a tree cell and a parent.
    pub fn parent_id(&self) -> Option<RowId> {
        self.tree_cell().and_then(|cell| cell.parent_id)
    }

    /// Whether this row is expanded. Rows without a tree cell report `false`.
    pub fn is_expanded(&self) -> bool {
        self.tree_cell().is_some_and(|cell| cell.is_expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_id_uniqueness() {
        let a = RowId::next();
        let b = RowId::next();
        assert_ne!(a, b);
        assert_ne!(a, RowId::HEADER);
        assert_ne!(b, RowId::HEADER);
    }

    #[test]
    fn test_tree_cell_lookup() {
        let row = Row::new(vec![
            Cell::Tree(TreeCell::root()),
            Cell::Text {
                text: "payload".into(),
            },
        ]);
        assert!(row.tree_cell().is_some());
        assert_eq!(row.parent_id(), None);
        assert!(!row.is_expanded());
    }

    #[test]
    fn test_row_without_tree_cell() {
        let row = Row::with_id(
            RowId::HEADER,
            vec![Cell::Header { text: "id".into() }],
        );
        assert!(row.tree_cell().is_none());
        assert_eq!(row.parent_id(), None);
    }
}
