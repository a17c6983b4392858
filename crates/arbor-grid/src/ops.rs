//! Structural mutations over the row sequence.
//!
//! Every operation takes the current sequence by reference and returns a
//! brand-new sequence (or an error), leaving the input untouched. The
//! caller re-runs the indexer and projector afterward. Each operation
//! starts by building a [`TreeIndex`], which both validates the input
//! (fail closed on structural damage) and supplies the indent data for
//! contiguous-block arithmetic.
//!
//! Placement rules all respect subtree contiguity: anything inserted
//! "below" a row lands after that row's whole descendant block, never
//! between the row and its children.

use tracing::debug;

use crate::cell::{Cell, TreeCell};
use crate::error::{GridError, Result};
use crate::index::TreeIndex;
use crate::row::{Row, RowId};

/// Where to place an inserted sibling relative to the reference row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// After the reference row's subtree block.
    Below,
    /// Directly before the reference row.
    Above,
}

/// Inserts a new sibling of `reference` (same parent, default cell
/// content) below or above it.
pub fn insert_sibling(
    rows: &[Row],
    reference: RowId,
    position: InsertPosition,
) -> Result<Vec<Row>> {
    let index = TreeIndex::build(rows)?;
    let pos = position_of(rows, reference)?;
    debug!(reference = %reference, ?position, "insert sibling");

    let cell = TreeCell {
        parent_id: index.parent(reference),
        ..TreeCell::root()
    };
    let new_row = Row::new(blank_cells_like(&rows[pos], cell));
    let at = match position {
        InsertPosition::Above => pos,
        InsertPosition::Below => subtree_end(rows, &index, pos),
    };

    let mut next = rows.to_vec();
    next.insert(at, new_row);
    Ok(next)
}

/// Inserts a new child of `parent` in the first child slot (directly after
/// the parent) and forces the parent open so the child is visible.
pub fn insert_child(rows: &[Row], parent: RowId) -> Result<Vec<Row>> {
    TreeIndex::build(rows)?;
    let pos = position_of(rows, parent)?;
    debug!(parent = %parent, "insert child");

    let child = Row::new(blank_cells_like(&rows[pos], TreeCell::child_of(parent)));
    let mut next = rows.to_vec();
    match next[pos].tree_cell_mut() {
        Some(cell) => cell.is_expanded = true,
        None => return Err(GridError::MissingTreeCell(parent)),
    }
    next.insert(pos + 1, child);
    Ok(next)
}

/// Inserts a two-level group below `reference`: a group row at the
/// reference's own level (expanded), immediately followed by one default
/// task row as the group's child. The reference row is forced open.
pub fn insert_task_group(rows: &[Row], reference: RowId) -> Result<Vec<Row>> {
    let index = TreeIndex::build(rows)?;
    let pos = position_of(rows, reference)?;
    debug!(reference = %reference, "insert task group");

    let group_cell = TreeCell {
        parent_id: index.parent(reference),
        ..TreeCell::root()
    }
    .with_expanded(true);
    let group = Row::new(blank_cells_like(&rows[pos], group_cell));
    let task = Row::new(blank_cells_like(
        &rows[pos],
        TreeCell::child_of(group.row_id),
    ));

    let at = subtree_end(rows, &index, pos);
    let mut next = rows.to_vec();
    if let Some(cell) = next[pos].tree_cell_mut() {
        cell.is_expanded = true;
    }
    next.insert(at, group);
    next.insert(at + 1, task);
    Ok(next)
}

/// Promotes `target` one level: re-parents it from its parent P to P's own
/// parent and relocates it (with its whole subtree) to directly after P's
/// subtree block. The promoted row gets a fresh [`RowId`] (a promotion is
/// a remove-and-reinsert, not an in-place edit) and its direct children
/// are re-pointed at the new ID.
pub fn promote(rows: &[Row], target: RowId) -> Result<Vec<Row>> {
    let index = TreeIndex::build(rows)?;
    let pos = position_of(rows, target)?;
    let Some(parent) = index.parent(target) else {
        return Err(GridError::invalid_selection("cannot promote a root row"));
    };
    debug!(target = %target, parent = %parent, "promote");

    let end = subtree_end(rows, &index, pos);
    let mut next = rows.to_vec();
    let mut block: Vec<Row> = next.drain(pos..end).collect();

    let new_id = RowId::next();
    block[0].row_id = new_id;
    if let Some(cell) = block[0].tree_cell_mut() {
        cell.parent_id = index.parent(parent);
    }
    for row in block.iter_mut().skip(1) {
        if let Some(cell) = row.tree_cell_mut()
            && cell.parent_id == Some(target)
        {
            cell.parent_id = Some(new_id);
        }
    }

    // The parent's subtree block shrank by the drained rows but kept its
    // order, so the stale index's indents are still valid for the scan.
    let parent_pos = position_of(&next, parent)?;
    let at = subtree_end(&next, &index, parent_pos);
    next.splice(at..at, block);
    Ok(next)
}

/// Re-parents `target` under the row directly above it, forcing the new
/// parent open. Like [`promote`], this is a remove-and-reinsert in terms
/// of identity: the row gets a fresh [`RowId`] and its direct children are
/// re-pointed at it. The row itself does not move: directly after its new
/// parent is exactly the first child slot.
pub fn make_child(rows: &[Row], target: RowId) -> Result<Vec<Row>> {
    TreeIndex::build(rows)?;
    let pos = position_of(rows, target)?;
    if pos == 0 {
        return Err(GridError::invalid_selection(
            "no row above to become the parent",
        ));
    }
    let parent_id = rows[pos - 1].row_id;
    debug!(target = %target, parent = %parent_id, "make child");

    let new_id = RowId::next();
    let mut next = rows.to_vec();
    next[pos].row_id = new_id;
    match next[pos].tree_cell_mut() {
        Some(cell) => cell.parent_id = Some(parent_id),
        None => return Err(GridError::MissingTreeCell(target)),
    }
    for row in next.iter_mut().skip(pos + 1) {
        if let Some(cell) = row.tree_cell_mut()
            && cell.parent_id == Some(target)
        {
            cell.parent_id = Some(new_id);
        }
    }
    if let Some(cell) = next[pos - 1].tree_cell_mut() {
        cell.is_expanded = true;
    }
    Ok(next)
}

/// Removes `target` and its entire contiguous descendant block.
pub fn remove_subtree(rows: &[Row], target: RowId) -> Result<Vec<Row>> {
    let index = TreeIndex::build(rows)?;
    let pos = position_of(rows, target)?;
    let end = subtree_end(rows, &index, pos);
    debug!(target = %target, removed = end - pos, "remove subtree");

    let mut next = rows.to_vec();
    next.drain(pos..end);
    Ok(next)
}

/// Moves the selected rows (each with its whole subtree block) to directly
/// after `target`'s subtree block, in selection order. Each moved block's
/// root is re-parented to the target's parent, so the moved rows become
/// the target's siblings and indent never desynchronizes from parentage.
///
/// Selected rows that are descendants of other selected rows are dropped
/// (their block already travels with the ancestor). Moving a row relative
/// to its own descendant is rejected.
pub fn move_subtrees(rows: &[Row], target: RowId, moved: &[RowId]) -> Result<Vec<Row>> {
    let index = TreeIndex::build(rows)?;
    if !index.contains(target) {
        return Err(GridError::RowNotFound(target));
    }

    let mut block_roots: Vec<RowId> = Vec::new();
    for &id in moved {
        if !index.contains(id) {
            return Err(GridError::RowNotFound(id));
        }
        if block_roots.contains(&id) {
            continue;
        }
        if moved.iter().any(|&other| other != id && index.is_ancestor(other, id)) {
            continue;
        }
        block_roots.push(id);
    }
    if block_roots.is_empty() {
        return Err(GridError::invalid_selection("no rows selected to move"));
    }
    if block_roots
        .iter()
        .any(|&id| id == target || index.is_ancestor(id, target))
    {
        return Err(GridError::invalid_selection(
            "target lies inside a moved subtree",
        ));
    }
    debug!(target = %target, blocks = block_roots.len(), "move subtrees");

    // Collect the blocks in selection order.
    let target_parent = index.parent(target);
    let mut moved_rows: Vec<Row> = Vec::new();
    for &id in &block_roots {
        let pos = position_of(rows, id)?;
        let end = subtree_end(rows, &index, pos);
        moved_rows.extend_from_slice(&rows[pos..end]);
    }
    for row in &mut moved_rows {
        if block_roots.contains(&row.row_id)
            && let Some(cell) = row.tree_cell_mut()
        {
            cell.parent_id = target_parent;
        }
    }

    let moved_ids: std::collections::HashSet<RowId> =
        moved_rows.iter().map(|r| r.row_id).collect();
    let mut next: Vec<Row> = rows
        .iter()
        .filter(|r| !moved_ids.contains(&r.row_id))
        .cloned()
        .collect();

    let target_pos = position_of(&next, target)?;
    let at = subtree_end(&next, &index, target_pos);
    next.splice(at..at, moved_rows);
    Ok(next)
}

/// Exclusive end of the contiguous subtree block starting at `start`:
/// extends while subsequent rows' indent is strictly greater than the
/// block root's indent.
fn subtree_end(rows: &[Row], index: &TreeIndex, start: usize) -> usize {
    let base = index.indent(rows[start].row_id).unwrap_or(0);
    let mut end = start + 1;
    while end < rows.len() {
        match index.indent(rows[end].row_id) {
            Some(indent) if indent > base => end += 1,
            _ => break,
        }
    }
    end
}

fn position_of(rows: &[Row], id: RowId) -> Result<usize> {
    rows.iter()
        .position(|r| r.row_id == id)
        .ok_or(GridError::RowNotFound(id))
}

/// Default cell content for a freshly inserted row, shaped like the
/// reference row: the tree cell in column 0, empty text cells elsewhere.
fn blank_cells_like(reference: &Row, tree: TreeCell) -> Vec<Cell> {
    if reference.cells.is_empty() {
        return vec![Cell::Tree(tree)];
    }
    let mut cells = Vec::with_capacity(reference.cells.len());
    cells.push(Cell::Tree(tree));
    cells.extend(reference.cells.iter().skip(1).map(|_| Cell::empty_text()));
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cell: TreeCell) -> Row {
        Row::new(vec![Cell::Tree(cell), Cell::empty_text()])
    }

    fn ids(rows: &[Row]) -> Vec<RowId> {
        rows.iter().map(|r| r.row_id).collect()
    }

    /// Checks subtree contiguity: every row's descendants occupy an
    /// unbroken block immediately after it.
    fn assert_contiguous(rows: &[Row]) {
        let index = TreeIndex::build(rows).expect("structurally valid");
        for (pos, r) in rows.iter().enumerate() {
            let mut descendants = 0;
            for other in &rows[pos + 1..] {
                if index.is_ancestor(r.row_id, other.row_id) {
                    descendants += 1;
                } else {
                    break;
                }
            }
            let total = rows[pos + 1..]
                .iter()
                .filter(|other| index.is_ancestor(r.row_id, other.row_id))
                .count();
            assert_eq!(
                descendants, total,
                "descendants of {} are not contiguous",
                r.row_id
            );
        }
    }

    /// A(root, expanded) -> [A1, A2 -> A2a]; B(root).
    fn sample() -> (Vec<Row>, RowId, RowId, RowId, RowId, RowId) {
        let a = row(TreeCell::root().with_expanded(true));
        let a1 = row(TreeCell::child_of(a.row_id));
        let a2 = row(TreeCell::child_of(a.row_id).with_expanded(true));
        let a2a = row(TreeCell::child_of(a2.row_id));
        let b = row(TreeCell::root());
        let ids = (a.row_id, a1.row_id, a2.row_id, a2a.row_id, b.row_id);
        (vec![a, a1, a2, a2a, b], ids.0, ids.1, ids.2, ids.3, ids.4)
    }

    #[test]
    fn test_insert_sibling_below_skips_subtree_block() {
        let (rows, a, .., b) = sample();
        let next = insert_sibling(&rows, a, InsertPosition::Below).unwrap();
        assert_eq!(next.len(), 6);
        // New sibling lands between A's block and B.
        let new_row = &next[4];
        assert_eq!(new_row.parent_id(), None);
        assert_eq!(next[5].row_id, b);
        assert_contiguous(&next);
    }

    #[test]
    fn test_insert_sibling_above() {
        let (rows, a, ..) = sample();
        let next = insert_sibling(&rows, a, InsertPosition::Above).unwrap();
        assert_eq!(next[1].row_id, a);
        assert_eq!(next[0].parent_id(), None);
        assert_contiguous(&next);
    }

    #[test]
    fn test_insert_sibling_inherits_parent() {
        let (rows, a, a1, ..) = sample();
        let next = insert_sibling(&rows, a1, InsertPosition::Below).unwrap();
        // A1 has no children, so the sibling sits right after it.
        assert_eq!(next[2].parent_id(), Some(a));
        assert_contiguous(&next);
    }

    #[test]
    fn test_insert_child_scenario() {
        // Spec scenario: lone root gains a child.
        let a = row(TreeCell::root());
        let a_id = a.row_id;
        let next = insert_child(&[a], a_id).unwrap();
        assert_eq!(next.len(), 2);
        assert_eq!(next[1].parent_id(), Some(a_id));
        assert!(next[0].is_expanded());

        let index = TreeIndex::build(&next).unwrap();
        assert_eq!(index.indent(next[1].row_id), Some(1));
        assert!(index.has_children(a_id));
    }

    #[test]
    fn test_insert_child_takes_first_child_slot() {
        let (rows, a, a1, ..) = sample();
        let next = insert_child(&rows, a).unwrap();
        assert_eq!(next[1].parent_id(), Some(a));
        assert_ne!(next[1].row_id, a1);
        assert_eq!(next[2].row_id, a1);
        assert_contiguous(&next);
    }

    #[test]
    fn test_insert_task_group() {
        let (rows, a, .., b) = sample();
        let next = insert_task_group(&rows, a).unwrap();
        assert_eq!(next.len(), 7);

        let group = &next[4];
        let task = &next[5];
        assert_eq!(group.parent_id(), None);
        assert!(group.is_expanded());
        assert_eq!(task.parent_id(), Some(group.row_id));
        assert_eq!(next[6].row_id, b);
        assert!(next[0].is_expanded());
        assert_contiguous(&next);
    }

    #[test]
    fn test_promote_moves_whole_subtree() {
        let (rows, a, a1, a2, a2a, b) = sample();
        let next = promote(&rows, a2).unwrap();
        assert_contiguous(&next);

        // A2 got a fresh identity at root level, directly after A's block.
        let promoted = &next[2];
        assert_ne!(promoted.row_id, a2);
        assert_eq!(promoted.parent_id(), None);
        assert_eq!(ids(&next)[..2], [a, a1]);
        assert_eq!(next[3].row_id, a2a);
        assert_eq!(next[3].parent_id(), Some(promoted.row_id));
        assert_eq!(next[4].row_id, b);

        let index = TreeIndex::build(&next).unwrap();
        assert_eq!(index.indent(promoted.row_id), Some(0));
        assert_eq!(index.indent(a2a), Some(1));
    }

    #[test]
    fn test_promote_root_is_invalid() {
        let (rows, a, ..) = sample();
        match promote(&rows, a) {
            Err(GridError::InvalidSelection { .. }) => {}
            other => panic!("expected InvalidSelection, got {other:?}"),
        }
    }

    #[test]
    fn test_make_child_adopts_row_above() {
        // [A, A1, B]: B becomes a child of A1.
        let a = row(TreeCell::root().with_expanded(true));
        let a1 = row(TreeCell::child_of(a.row_id));
        let b = row(TreeCell::root().with_expanded(true));
        let b1 = row(TreeCell::child_of(b.row_id));
        let (a1_id, b_id, b1_id) = (a1.row_id, b.row_id, b1.row_id);

        let next = make_child(&[a, a1, b, b1], b_id).unwrap();
        let adopted = &next[2];
        assert_ne!(adopted.row_id, b_id);
        assert_eq!(adopted.parent_id(), Some(a1_id));
        // B's own child follows it under the new identity.
        assert_eq!(next[3].row_id, b1_id);
        assert_eq!(next[3].parent_id(), Some(adopted.row_id));
        // The new parent was forced open.
        assert!(next[1].is_expanded());
        assert_contiguous(&next);

        let index = TreeIndex::build(&next).unwrap();
        assert_eq!(index.indent(adopted.row_id), Some(2));
        assert_eq!(index.indent(b1_id), Some(3));
    }

    #[test]
    fn test_make_child_of_first_row_is_invalid() {
        let (rows, a, ..) = sample();
        match make_child(&rows, a) {
            Err(GridError::InvalidSelection { .. }) => {}
            other => panic!("expected InvalidSelection, got {other:?}"),
        }
    }

    #[test]
    fn test_remove_subtree_scenario() {
        // Spec scenario: A -> B -> C, deleting A empties the sequence.
        let a = row(TreeCell::root().with_expanded(true));
        let b = row(TreeCell::child_of(a.row_id).with_expanded(true));
        let c = row(TreeCell::child_of(b.row_id));
        let a_id = a.row_id;
        let next = remove_subtree(&[a, b, c], a_id).unwrap();
        assert!(next.is_empty());
    }

    #[test]
    fn test_remove_subtree_completeness() {
        let (rows, _, _, a2, ..) = sample();
        let next = remove_subtree(&rows, a2).unwrap();
        // Exactly A2 and A2a gone, nobody points at a removed row.
        assert_eq!(next.len(), rows.len() - 2);
        TreeIndex::build(&next).unwrap();
        assert_contiguous(&next);
    }

    #[test]
    fn test_move_subtree_scenario() {
        // Spec scenario: [A, A1, B, B1], moving {A} after B.
        let a = row(TreeCell::root().with_expanded(true));
        let a1 = row(TreeCell::child_of(a.row_id));
        let b = row(TreeCell::root().with_expanded(true));
        let b1 = row(TreeCell::child_of(b.row_id));
        let (a_id, a1_id, b_id, b1_id) = (a.row_id, a1.row_id, b.row_id, b1.row_id);

        let next = move_subtrees(&[a, a1, b, b1], b_id, &[a_id]).unwrap();
        assert_eq!(ids(&next), vec![b_id, b1_id, a_id, a1_id]);
        assert_contiguous(&next);
    }

    #[test]
    fn test_move_reparents_to_target_level() {
        let (rows, _, a1, _, _, b) = sample();
        // Pull A1 out of A and drop it after root B.
        let next = move_subtrees(&rows, b, &[a1]).unwrap();
        let moved = next.iter().find(|r| r.row_id == a1).unwrap();
        assert_eq!(moved.parent_id(), None);
        assert_eq!(next.last().unwrap().row_id, a1);
        assert_contiguous(&next);
    }

    #[test]
    fn test_move_drops_nested_selection() {
        let (rows, a, a1, a2, a2a, b) = sample();
        // A2a rides along with A2; selecting both must not duplicate it.
        let next = move_subtrees(&rows, b, &[a2, a2a]).unwrap();
        assert_eq!(next.len(), rows.len());
        assert_eq!(ids(&next), vec![a, a1, b, a2, a2a]);
        assert_contiguous(&next);
    }

    #[test]
    fn test_move_into_own_subtree_is_invalid() {
        let (rows, a, _, _, a2a, _) = sample();
        match move_subtrees(&rows, a2a, &[a]) {
            Err(GridError::InvalidSelection { .. }) => {}
            other => panic!("expected InvalidSelection, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_rows_are_reported() {
        let (rows, a, ..) = sample();
        let ghost = RowId::next();
        assert!(matches!(
            insert_child(&rows, ghost),
            Err(GridError::RowNotFound(id)) if id == ghost
        ));
        assert!(matches!(
            move_subtrees(&rows, ghost, &[a]),
            Err(GridError::RowNotFound(id)) if id == ghost
        ));
    }

    #[test]
    fn test_mutation_sequences_preserve_contiguity() {
        let (rows, a, _, a2, _, b) = sample();
        let step1 = insert_child(&rows, b).unwrap();
        let step2 = insert_task_group(&step1, a2).unwrap();
        let step3 = promote(&step2, a2).unwrap();
        let step4 = move_subtrees(&step3, b, &[a]).unwrap();
        let step5 = remove_subtree(&step4, a).unwrap();
        for step in [&step1, &step2, &step3, &step4, &step5] {
            assert_contiguous(step);
        }
    }
}
