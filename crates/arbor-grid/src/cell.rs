//! Cell variants carried by rows.
//!
//! Cells are a tagged variant, mirroring the cell types the grid widget
//! understands. The tree cell in column 0 is where the implicit tree
//! lives: `parent_id` and `is_expanded` are authoritative, while `indent`,
//! `has_children` and `label` are derived caches that the indexer
//! recomputes wholesale each cycle and the projector stamps onto render
//! clones. The canonical store never trusts the derived fields.

use crate::row::RowId;

/// A single cell in a row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Column caption cell; only appears in the synthetic header row.
    Header {
        /// Caption text.
        text: String,
    },
    /// Tree metadata cell; column 0 of every data row.
    Tree(TreeCell),
    /// Ordinary editable text cell.
    Text {
        /// Cell content.
        text: String,
    },
}

impl Cell {
    /// Creates an empty text cell.
    pub fn empty_text() -> Self {
        Cell::Text { text: String::new() }
    }

    /// Creates a text cell with the given content.
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text { text: text.into() }
    }

    /// Returns the textual content for header and text cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Header { text } | Cell::Text { text } => Some(text),
            Cell::Tree(_) => None,
        }
    }

    /// Returns the tree cell, if this is one.
    pub fn as_tree(&self) -> Option<&TreeCell> {
        match self {
            Cell::Tree(cell) => Some(cell),
            _ => None,
        }
    }

    /// Mutable access to the tree cell, if this is one.
    pub fn as_tree_mut(&mut self) -> Option<&mut TreeCell> {
        match self {
            Cell::Tree(cell) => Some(cell),
            _ => None,
        }
    }

    /// Returns `true` for header cells.
    pub fn is_header(&self) -> bool {
        matches!(self, Cell::Header { .. })
    }
}

/// Tree metadata for one row.
///
/// `parent_id` and `is_expanded` are the authoritative fields; everything
/// else is derived and owned by the [`TreeIndex`](crate::index::TreeIndex).
#[derive(Debug, Clone, PartialEq)]
pub struct TreeCell {
    /// Back-reference to the parent row; `None` means root.
    pub parent_id: Option<RowId>,
    /// User-togglable expansion flag; meaningful only with children.
    pub is_expanded: bool,
    /// Derived depth, root = 0. Recomputed every pass, never authoritative.
    pub indent: usize,
    /// Derived: whether any row points at this one. Never authoritative.
    pub has_children: bool,
    /// Derived display label (dense positional index). Not an identifier;
    /// never use it for lookups.
    pub label: String,
}

impl TreeCell {
    /// Creates a collapsed root tree cell.
    pub fn root() -> Self {
        Self {
            parent_id: None,
            is_expanded: false,
            indent: 0,
            has_children: false,
            label: String::new(),
        }
    }

    /// Creates a collapsed tree cell parented to the given row.
    pub fn child_of(parent_id: RowId) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::root()
        }
    }

    /// Sets the expansion flag.
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.is_expanded = expanded;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_accessors() {
        let text = Cell::text("abc");
        assert_eq!(text.as_text(), Some("abc"));
        assert!(text.as_tree().is_none());

        let tree = Cell::Tree(TreeCell::root());
        assert!(tree.as_text().is_none());
        assert!(tree.as_tree().is_some());

        let header = Cell::Header { text: "id".into() };
        assert!(header.is_header());
        assert_eq!(header.as_text(), Some("id"));
    }

    #[test]
    fn test_tree_cell_builders() {
        let parent = RowId::next();
        let cell = TreeCell::child_of(parent).with_expanded(true);
        assert_eq!(cell.parent_id, Some(parent));
        assert!(cell.is_expanded);
        assert_eq!(cell.indent, 0);
        assert!(!cell.has_children);
    }
}
