//! Selection-set transforms for the data table.
//!
//! All operations are pure: they return the next selection and never
//! mutate in place. The caller owns the state and re-renders with the
//! result.

use crate::types::{RowKey, SelectionMode, SelectionState};

impl SelectionState {
    /// Empty selection in the given mode
    pub fn new(mode: SelectionMode) -> Self {
        Self { mode, keys: Vec::new() }
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Selection after a click on one row
    ///
    /// Single mode: the selected key clears the selection, any other key
    /// replaces it. Multiple mode: absent keys append, present keys are
    /// removed with the rest keeping their order.
    pub fn toggle(&self, key: &str) -> Self {
        let keys = match self.mode {
            SelectionMode::Single => {
                if self.is_selected(key) {
                    Vec::new()
                } else {
                    vec![key.to_string()]
                }
            }
            SelectionMode::Multiple => {
                if self.is_selected(key) {
                    self.keys.iter().filter(|k| *k != key).cloned().collect()
                } else {
                    let mut keys = self.keys.clone();
                    keys.push(key.to_string());
                    keys
                }
            }
        };

        Self { mode: self.mode, keys }
    }

    /// Selection after the header "select all" toggle
    ///
    /// Destructive replace: if every visible key is already selected the
    /// result is empty, otherwise the result is exactly the visible keys.
    /// It is never a union with the prior selection; the contract is
    /// "all rows on this page", not "all rows ever".
    ///
    /// Single-row tables do not offer the toggle, so in single mode this
    /// is a no-op.
    pub fn toggle_visible(&self, visible: &[RowKey]) -> Self {
        if self.mode == SelectionMode::Single {
            tracing::debug!("Select-all ignored in single selection mode");
            return self.clone();
        }

        let all_selected =
            !visible.is_empty() && visible.iter().all(|key| self.is_selected(key));

        let keys = if all_selected {
            Vec::new()
        } else {
            visible.to_vec()
        };

        Self { mode: self.mode, keys }
    }

    /// Empty selection, same mode
    pub fn clear(&self) -> Self {
        Self::new(self.mode)
    }
}
