//! Visibility projection: the subsequence of rows that gets rendered.
//!
//! A row is visible iff every ancestor on its parent chain is expanded. A
//! collapsed row is itself still visible; only its descendants are hidden.
//! The projection is pure: it clones the visible rows, stamps the derived
//! metadata from the [`TreeIndex`] into each clone's tree cell for the
//! renderer's benefit, and prepends the synthetic header row. The
//! canonical sequence is never touched.

use crate::column::{Column, header_row};
use crate::index::TreeIndex;
use crate::row::Row;

/// Returns the visible data rows in sequence order, derived metadata
/// stamped into their tree cells. No header row.
pub fn visible_rows(rows: &[Row], index: &TreeIndex) -> Vec<Row> {
    rows.iter()
        .filter(|row| index.is_fully_expanded(row.row_id))
        .map(|row| stamp(row, index))
        .collect()
}

/// Returns the full render input for the grid widget: the synthetic header
/// row followed by the visible data rows.
pub fn render_rows(rows: &[Row], columns: &[Column], index: &TreeIndex) -> Vec<Row> {
    let mut out = Vec::with_capacity(rows.len() + 1);
    out.push(header_row(columns));
    out.extend(visible_rows(rows, index));
    out
}

/// Clones a row with the index's derived metadata written into its tree
/// cell. Authoritative fields are copied through unchanged.
fn stamp(row: &Row, index: &TreeIndex) -> Row {
    let mut out = row.clone();
    if let (Some(cell), Some(meta)) = (out.tree_cell_mut(), index.meta(row.row_id)) {
        cell.indent = meta.indent;
        cell.has_children = meta.has_children;
        cell.label = meta.label.clone();
    }
    out
}
