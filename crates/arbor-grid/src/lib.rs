//! Arbor Grid: a tree-backed row model for flat grid widgets.
//!
//! Grid widgets render a flat, ordered list of rows; tree structure has to
//! be encoded *inside* that list. This crate maintains such a dataset: each
//! row carries a parent back-reference in its tree cell, the sequence order
//! encodes sibling order, and everything else (indent depth, has-children
//! flags, display labels, the set of rows that should actually be rendered)
//! is derived and recomputed after every change.
//!
//! # Core Types
//!
//! - [`Row`] / [`Cell`] / [`TreeCell`]: the flat data model
//! - [`RowStore`]: canonical sequence owner with atomic replace
//! - [`TreeIndex`]: derived tree metadata, rebuilt per mutation cycle
//! - [`ops`]: structural mutations (insert, promote, delete, move)
//! - [`CellEdit`]: external cell-edit events
//! - [`TreeGrid`]: the façade the grid widget talks to
//!
//! # Example
//!
//! ```
//! use arbor_grid::{Cell, Column, Row, TreeCell, TreeGrid};
//!
//! let columns = vec![Column::new("id", 100), Column::new("title", 400)];
//! let root = Row::new(vec![
//!     Cell::Tree(TreeCell::root()),
//!     Cell::text("Build the thing"),
//! ]);
//! let root_id = root.row_id;
//!
//! let grid = TreeGrid::new(columns, vec![root]).unwrap();
//! grid.add_child(root_id).unwrap();
//!
//! // Header row plus both data rows: adding a child expands the parent.
//! let rendered = grid.render_rows().unwrap();
//! assert_eq!(rendered.len(), 3);
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! edits / menu actions / reorder requests
//!                 │
//!                 ▼
//!       ┌─────────────────┐    atomic swap    ┌──────────┐
//!       │ ops / edit      │──────────────────>│ RowStore │
//!       │ (new sequence)  │   (on success)    └────┬─────┘
//!       └─────────────────┘                        │
//!                 ▲                                ▼
//!                 │                         ┌───────────┐
//!          fail closed on                   │ TreeIndex │
//!          structural damage                └────┬──────┘
//!                                                ▼
//!                                        ┌──────────────┐
//!                                        │  projection  │──> rows to render
//!                                        └──────────────┘
//! ```
//!
//! Mutations never edit in place: they compute a brand-new sequence which
//! is swapped in only after the indexer validates it, so the previous
//! valid tree survives any failed attempt.
//!
//! This crate uses [`tracing`] for instrumentation; install a subscriber
//! in the application to see mutation-boundary logs.

pub mod cell;
pub mod column;
pub mod demo;
pub mod edit;
pub mod error;
pub mod grid;
pub mod index;
pub mod menu;
pub mod ops;
pub mod project;
pub mod row;
pub mod selection;
pub mod store;

pub use cell::{Cell, TreeCell};
pub use column::{Column, column_position, header_row};
pub use edit::{CellEdit, apply_edits};
pub use error::{GridError, Result};
pub use grid::TreeGrid;
pub use index::{RowMeta, TreeIndex};
pub use menu::{MenuAction, menu_actions};
pub use ops::InsertPosition;
pub use project::{render_rows, visible_rows};
pub use row::{DEFAULT_ROW_HEIGHT, Row, RowId};
pub use selection::SelectionMode;
pub use store::RowStore;
