//! Selection state.
//!
//! Tracks selected rows by [`RowIdentity`]. The set is independent of
//! pagination: page navigation, page-size changes and sorting never touch
//! it. "Select all" works on the rows the caller passes in, which the table
//! supplies as the current page.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::identity::RowIdentity;

/// Selection mode for a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// No selection allowed.
    None,
    /// At most one row selected.
    Single,
    /// Any number of rows selected (checkbox style).
    #[default]
    Multiple,
}

/// Identity-based selection set.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    mode: SelectionMode,
    selected: HashSet<RowIdentity>,
}

impl Selection {
    /// Create an empty multi-select selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty selection with the given mode.
    pub fn with_mode(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: HashSet::new(),
        }
    }

    /// Get the selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Change the selection mode.
    ///
    /// Switching to `None` clears the set; switching to `Single` keeps at
    /// most one (arbitrary) identity. Returns true if the set changed.
    pub fn set_mode(&mut self, mode: SelectionMode) -> bool {
        self.mode = mode;
        match mode {
            SelectionMode::None => !self.clear().is_empty(),
            SelectionMode::Single if self.selected.len() > 1 => {
                let keep = self.ids().into_iter().next();
                self.selected.clear();
                self.selected.extend(keep);
                true
            }
            _ => false,
        }
    }

    /// Check if an identity is selected.
    pub fn is_selected(&self, id: &RowIdentity) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected identities, across all pages.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The raw selection set.
    pub fn as_set(&self) -> &HashSet<RowIdentity> {
        &self.selected
    }

    /// All selected identities, keys in order then references.
    pub fn ids(&self) -> Vec<RowIdentity> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Flip membership of `id`. Returns true if the set changed.
    ///
    /// In `Single` mode selecting a row deselects every other row.
    pub fn toggle(&mut self, id: RowIdentity) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                if !self.selected.remove(&id) {
                    self.selected.clear();
                    self.selected.insert(id);
                }
                true
            }
            SelectionMode::Multiple => {
                if !self.selected.remove(&id) {
                    self.selected.insert(id);
                }
                true
            }
        }
    }

    /// Check if every one of `visible` is selected.
    ///
    /// False for an empty slice, so an empty page never shows a checked
    /// header box.
    pub fn all_selected(&self, visible: &[RowIdentity]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.selected.contains(id))
    }

    /// Check if at least one, but not every one, of `visible` is selected.
    pub fn some_selected(&self, visible: &[RowIdentity]) -> bool {
        let count = visible
            .iter()
            .filter(|id| self.selected.contains(*id))
            .count();
        count > 0 && count < visible.len()
    }

    /// Select or deselect all of `visible`.
    ///
    /// When every one is already selected they are all removed; otherwise
    /// they are all added. Identities outside `visible` are left alone.
    /// Only active in `Multiple` mode. Returns true if the set changed.
    pub fn toggle_all_visible(&mut self, visible: &[RowIdentity]) -> bool {
        if self.mode != SelectionMode::Multiple || visible.is_empty() {
            return false;
        }
        if self.all_selected(visible) {
            for id in visible {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(visible.iter().cloned());
        }
        true
    }

    /// Clear all selection. Returns the identities that were deselected.
    pub fn clear(&mut self) -> Vec<RowIdentity> {
        let mut removed: Vec<_> = self.selected.drain().collect();
        removed.sort();
        removed
    }
}
