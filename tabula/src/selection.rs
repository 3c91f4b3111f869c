//! Row selection for bulk actions.
//!
//! The set is scoped to whatever `data` slice the caller passes in (usually
//! one page). Keys of rows that have since left `data` are kept in the set
//! until the next select-all or clear; they are simply skipped when the
//! selection is joined back onto live rows.

use std::collections::HashSet;

use log::debug;

use crate::model::{GridRow, RowKey};

/// Header checkbox state derived from the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Tracks selected rows by key.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: HashSet<RowKey>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selected.contains(key)
    }

    /// Number of keys in the set, stale ones included.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// All selected keys, sorted for deterministic ordering.
    pub fn keys(&self) -> Vec<RowKey> {
        let mut keys: Vec<_> = self.selected.iter().cloned().collect();
        keys.sort();
        keys
    }

    /// Clear all selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Add or remove one key. Returns `true` if the key is now selected.
    pub fn toggle_row(&mut self, key: RowKey) -> bool {
        if self.selected.remove(&key) {
            debug!("deselected row {key}");
            false
        } else {
            debug!("selected row {key}");
            self.selected.insert(key);
            true
        }
    }

    /// Select every row in `keys`, or clear if every one is already selected.
    ///
    /// No-op for an empty slice.
    pub fn toggle_all(&mut self, keys: &[RowKey]) {
        if keys.is_empty() {
            return;
        }
        if self.all_selected(keys) {
            debug!("select-all cleared {} rows", keys.len());
            self.selected.clear();
        } else {
            debug!("select-all selected {} rows", keys.len());
            self.selected = keys.iter().cloned().collect();
        }
    }

    /// Every key in `keys` is selected. False for an empty slice.
    pub fn all_selected(&self, keys: &[RowKey]) -> bool {
        self.select_all_state(keys) == SelectAllState::Checked
    }

    /// At least one, but not every, key in `keys` is selected.
    pub fn some_selected(&self, keys: &[RowKey]) -> bool {
        self.select_all_state(keys) == SelectAllState::Indeterminate
    }

    /// Header checkbox state for the rows currently shown.
    pub fn select_all_state(&self, keys: &[RowKey]) -> SelectAllState {
        let live = keys.iter().filter(|k| self.selected.contains(*k)).count();
        if live == 0 {
            SelectAllState::Unchecked
        } else if live == keys.len() {
            SelectAllState::Checked
        } else {
            SelectAllState::Indeterminate
        }
    }

    /// Rows of `data` whose key is selected, in `data` order.
    pub fn selected_rows<'a, R: GridRow>(&self, data: &'a [R], key_field: &str) -> Vec<&'a R> {
        data.iter()
            .enumerate()
            .filter(|(i, row)| self.selected.contains(&RowKey::of(*row, key_field, *i)))
            .map(|(_, row)| row)
            .collect()
    }
}
