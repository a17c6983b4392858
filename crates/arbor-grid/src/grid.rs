//! The `TreeGrid` façade: the request/response boundary with the widget.
//!
//! `TreeGrid` owns the row store and the column list and exposes the full
//! event surface: render queries, cell-edit batches, context-menu queries
//! and dispatch, reorder requests, and expand/collapse. Every mutation is
//! handled to completion (compute a new sequence, re-index, swap) before
//! the next one; a failed mutation leaves the previous valid sequence in
//! place. There is no hidden state beyond the sequence itself.

use tracing::debug;

use crate::cell::Cell;
use crate::column::Column;
use crate::edit::{self, CellEdit};
use crate::error::{GridError, Result};
use crate::index::TreeIndex;
use crate::menu::{self, MenuAction};
use crate::ops::{self, InsertPosition};
use crate::project;
use crate::row::{Row, RowId};
use crate::selection::SelectionMode;
use crate::store::RowStore;

/// Tree-backed grid core.
pub struct TreeGrid {
    columns: Vec<Column>,
    store: RowStore,
}

impl TreeGrid {
    /// Creates a grid over the given columns and seed rows.
    ///
    /// The seed is validated up front: structural damage in the initial
    /// data is rejected rather than carried. At least one column (the tree
    /// column) is required.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Result<Self> {
        if columns.is_empty() {
            return Err(GridError::ColumnNotFound("tree column".into()));
        }
        TreeIndex::build(&rows)?;
        Ok(Self {
            columns,
            store: RowStore::new(rows),
        })
    }

    /// The grid's columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Snapshot of the canonical row sequence (all rows, hidden included).
    pub fn rows(&self) -> Vec<Row> {
        self.store.snapshot()
    }

    /// Number of rows in the store.
    pub fn row_count(&self) -> usize {
        self.store.len()
    }

    /// The rows to hand to the rendering widget: the synthetic header row
    /// followed by the visible data rows, derived tree metadata stamped in.
    pub fn render_rows(&self) -> Result<Vec<Row>> {
        let rows = self.store.snapshot();
        let index = TreeIndex::build(&rows)?;
        Ok(project::render_rows(&rows, &self.columns, &index))
    }

    /// Applies a batch of cell edits, then re-validates the tree. A batch
    /// that leaves the tree structurally broken (e.g. an edit pointing a
    /// parent reference at a missing row) is rejected wholesale.
    pub fn apply_edits(&self, edits: &[CellEdit]) -> Result<()> {
        debug!(edits = edits.len(), "applying cell edit batch");
        self.store.try_update(|rows| {
            let next = edit::apply_edits(rows, &self.columns, edits);
            TreeIndex::build(&next)?;
            Ok(next)
        })
    }

    /// Context-menu actions for the given selection.
    pub fn menu_actions(&self, selected: &[RowId], mode: SelectionMode) -> Vec<MenuAction> {
        menu::menu_actions(selected, mode)
    }

    /// Dispatches a context-menu action against its selected row.
    pub fn dispatch(&self, action: MenuAction, target: RowId) -> Result<()> {
        debug!(action = action.id(), target = %target, "dispatching menu action");
        self.store.try_update(|rows| match action {
            MenuAction::AddTaskBelow => ops::insert_sibling(rows, target, InsertPosition::Below),
            MenuAction::AddTaskAbove => ops::insert_sibling(rows, target, InsertPosition::Above),
            MenuAction::AddTaskGroupBelow => ops::insert_task_group(rows, target),
            MenuAction::MakeChildTask => ops::make_child(rows, target),
            MenuAction::PromoteTask => ops::promote(rows, target),
            MenuAction::RemoveTask => ops::remove_subtree(rows, target),
        })
    }

    /// Inserts a new child under `parent` and forces the parent open.
    pub fn add_child(&self, parent: RowId) -> Result<()> {
        self.store.try_update(|rows| ops::insert_child(rows, parent))
    }

    /// Handles a reorder request: moves the selected rows (with their
    /// subtrees) to directly after the target row's subtree block.
    pub fn reorder(&self, target: RowId, moved: &[RowId]) -> Result<()> {
        debug!(target = %target, moved = moved.len(), "reorder request");
        self.store
            .try_update(|rows| ops::move_subtrees(rows, target, moved))
    }

    /// Sets a row's expansion flag. Travels the cell-edit path: the change
    /// is a whole-cell replacement of the row's tree cell.
    pub fn set_expanded(&self, row_id: RowId, expanded: bool) -> Result<()> {
        let rows = self.store.snapshot();
        let row = rows
            .iter()
            .find(|r| r.row_id == row_id)
            .ok_or(GridError::RowNotFound(row_id))?;
        let cell = row
            .tree_cell()
            .ok_or(GridError::MissingTreeCell(row_id))?
            .clone()
            .with_expanded(expanded);
        let edit = CellEdit::new(row_id, self.columns[0].column_id.clone(), Cell::Tree(cell));
        self.apply_edits(&[edit])
    }

    /// Toggles a row's expansion flag.
    pub fn toggle_expanded(&self, row_id: RowId) -> Result<()> {
        let expanded = self
            .store
            .snapshot()
            .iter()
            .find(|r| r.row_id == row_id)
            .ok_or(GridError::RowNotFound(row_id))?
            .is_expanded();
        self.set_expanded(row_id, !expanded)
    }
}
