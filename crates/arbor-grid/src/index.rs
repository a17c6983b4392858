//! Tree indexing: derived metadata over the flat row sequence.
//!
//! The tree between rows is implicit (parent back-references plus sequence
//! order), so every piece of tree metadata (indent depth, has-children,
//! display labels) is derived. [`TreeIndex`] recomputes all of it in one
//! pass over the sequence and keeps it in a transient side-table keyed by
//! [`RowId`], never mutating the shared rows. Rebuilding after every
//! mutation is what keeps the cache from drifting away from the actual
//! structure.
//!
//! Indexing is pure: building twice over the same sequence yields
//! identical metadata.

use std::collections::{HashMap, HashSet};

use crate::error::{GridError, Result};
use crate::row::{Row, RowId};

/// Derived metadata for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowMeta {
    /// Parent back-reference, snapshotted from the row's tree cell.
    pub parent_id: Option<RowId>,
    /// Expansion flag, snapshotted from the row's tree cell.
    pub is_expanded: bool,
    /// Depth in the tree; roots are 0, children are parent + 1.
    pub indent: usize,
    /// Whether any row points at this one as its parent.
    pub has_children: bool,
    /// Dense positional label (sequence index in string form). Order-
    /// dependent, not a stable identifier.
    pub label: String,
}

/// Side-table of derived tree metadata for a row sequence.
///
/// A `TreeIndex` is a pure function of the sequence it was built from; it
/// becomes stale the moment the sequence changes and must be rebuilt.
///
/// # Errors
///
/// Building fails closed on structural damage rather than rendering a
/// partially-indexed tree: a parent reference to a missing row, a parent
/// cycle, or a data row without a tree cell all abort the build.
#[derive(Debug, Clone)]
pub struct TreeIndex {
    meta: HashMap<RowId, RowMeta>,
    children: HashMap<RowId, Vec<RowId>>,
    roots: Vec<RowId>,
}

impl TreeIndex {
    /// Builds the index for the given row sequence.
    pub fn build(rows: &[Row]) -> Result<Self> {
        let mut meta: HashMap<RowId, RowMeta> = HashMap::with_capacity(rows.len());
        let mut children: HashMap<RowId, Vec<RowId>> = HashMap::new();
        let mut roots: Vec<RowId> = Vec::new();

        // First pass: register every row and snapshot its authoritative
        // tree fields. Labels are positional.
        for (pos, row) in rows.iter().enumerate() {
            let cell = row
                .tree_cell()
                .ok_or(GridError::MissingTreeCell(row.row_id))?;
            meta.insert(
                row.row_id,
                RowMeta {
                    parent_id: cell.parent_id,
                    is_expanded: cell.is_expanded,
                    indent: 0,
                    has_children: false,
                    label: pos.to_string(),
                },
            );
        }

        // Second pass: parent -> children multimap in sequence order, so
        // child order always matches the sequence.
        for row in rows {
            match row.parent_id() {
                Some(parent) => {
                    if !meta.contains_key(&parent) {
                        return Err(GridError::MissingParent {
                            row: row.row_id,
                            parent,
                        });
                    }
                    children.entry(parent).or_default().push(row.row_id);
                }
                None => roots.push(row.row_id),
            }
        }

        // Third pass: depth-first from the roots, assigning indent and
        // has-children. Every parent reference resolved above, so a row
        // left unvisited can only sit on a parent cycle.
        let mut visited: HashSet<RowId> = HashSet::with_capacity(rows.len());
        let mut stack: Vec<(RowId, usize)> = roots.iter().rev().map(|&id| (id, 0)).collect();
        while let Some((id, indent)) = stack.pop() {
            visited.insert(id);
            let kids = children.get(&id).map(Vec::as_slice).unwrap_or(&[]);
            if let Some(m) = meta.get_mut(&id) {
                m.indent = indent;
                m.has_children = !kids.is_empty();
            }
            for &child in kids.iter().rev() {
                stack.push((child, indent + 1));
            }
        }
        if visited.len() != meta.len() {
            let row = rows
                .iter()
                .map(|r| r.row_id)
                .find(|id| !visited.contains(id))
                .unwrap_or(RowId::HEADER);
            return Err(GridError::CycleDetected { row });
        }

        Ok(Self {
            meta,
            children,
            roots,
        })
    }

    /// Number of indexed rows.
    pub fn len(&self) -> usize {
        self.meta.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
    }

    /// Whether the given row was part of the indexed sequence.
    pub fn contains(&self, id: RowId) -> bool {
        self.meta.contains_key(&id)
    }

    /// Derived metadata for a row.
    pub fn meta(&self, id: RowId) -> Option<&RowMeta> {
        self.meta.get(&id)
    }

    /// Parent of a row, if it has one.
    pub fn parent(&self, id: RowId) -> Option<RowId> {
        self.meta.get(&id).and_then(|m| m.parent_id)
    }

    /// Indent depth of a row.
    pub fn indent(&self, id: RowId) -> Option<usize> {
        self.meta.get(&id).map(|m| m.indent)
    }

    /// Whether a row has children.
    pub fn has_children(&self, id: RowId) -> bool {
        self.meta.get(&id).is_some_and(|m| m.has_children)
    }

    /// Direct children of a row, in sequence order.
    pub fn children(&self, id: RowId) -> &[RowId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Root rows, in sequence order.
    pub fn roots(&self) -> &[RowId] {
        &self.roots
    }

    /// Whether `ancestor` lies on `id`'s parent chain (strictly above it).
    pub fn is_ancestor(&self, ancestor: RowId, id: RowId) -> bool {
        let mut current = self.parent(id);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.parent(p);
        }
        false
    }

    /// Whether every ancestor of `id`, transitively to the root, is
    /// expanded. A collapsed row is itself still fully expanded in this
    /// sense; only its children are hidden.
    pub fn is_fully_expanded(&self, id: RowId) -> bool {
        let mut current = self.parent(id);
        while let Some(p) = current {
            match self.meta.get(&p) {
                Some(m) if m.is_expanded => current = m.parent_id,
                _ => return false,
            }
        }
        true
    }
}
