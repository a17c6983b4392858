//! Canonical row storage.
//!
//! The store exclusively owns the ordered row sequence. Everything else
//! (indexer, projector, mutation operations) reads snapshots and produces
//! new sequences; the only way to mutate is to replace the whole sequence
//! atomically. A failed mutation therefore never leaves a half-applied
//! state behind; intermediate states (a subtree block removed but not yet
//! reinserted) are never observable.

use parking_lot::RwLock;

use crate::error::Result;
use crate::row::{Row, RowId};

/// Owner of the canonical ordered row sequence.
pub struct RowStore {
    rows: RwLock<Vec<Row>>,
}

impl RowStore {
    /// Creates a store over the given initial sequence.
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Returns a snapshot clone of the current sequence.
    pub fn snapshot(&self) -> Vec<Row> {
        self.rows.read().clone()
    }

    /// Number of rows in the store.
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Whether a row with the given ID is present.
    pub fn contains(&self, id: RowId) -> bool {
        self.rows.read().iter().any(|r| r.row_id == id)
    }

    /// Position of a row in the sequence.
    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.read().iter().position(|r| r.row_id == id)
    }

    /// Replaces the whole sequence.
    pub fn replace(&self, rows: Vec<Row>) {
        *self.rows.write() = rows;
    }

    /// Atomic read-modify-write: computes a replacement sequence from the
    /// current one and swaps it in only if the computation succeeds. On
    /// error the previous sequence is left intact.
    pub fn try_update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&[Row]) -> Result<Vec<Row>>,
    {
        let mut guard = self.rows.write();
        let next = f(&guard)?;
        *guard = next;
        Ok(())
    }
}
