//! Selection state management.
//!
//! Selection is keyed by row id, never by row contents, so it stays stable
//! when rows are re-sorted, filtered out, or replaced by equal-valued rows.

use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

/// Selection mode for a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// No selection allowed
    #[default]
    None,
    /// Single row selection (radio-button style)
    Single,
    /// Multiple rows can be selected (checkbox style)
    Multiple,
}

/// Ids added to and removed from a selection by one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionDelta {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl SelectionDelta {
    /// Returns `true` if the operation changed nothing.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// ID-based selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    mode: SelectionMode,
    /// Currently selected IDs
    selected: HashSet<String>,
}

impl Selection {
    /// Create an empty selection with the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: HashSet::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Toggle selection of an ID.
    ///
    /// In single mode a new ID replaces the selection and the selected ID
    /// clears it. In multiple mode IDs are added and removed independently.
    pub fn toggle(&mut self, id: &str) -> SelectionDelta {
        match self.mode {
            SelectionMode::None => SelectionDelta::default(),
            SelectionMode::Single => {
                if self.selected.contains(id) {
                    SelectionDelta {
                        added: vec![],
                        removed: self.selected.drain().collect(),
                    }
                } else {
                    let removed = self.selected.drain().collect();
                    self.selected.insert(id.to_string());
                    SelectionDelta {
                        added: vec![id.to_string()],
                        removed,
                    }
                }
            }
            SelectionMode::Multiple => {
                if self.selected.remove(id) {
                    SelectionDelta {
                        added: vec![],
                        removed: vec![id.to_string()],
                    }
                } else {
                    self.selected.insert(id.to_string());
                    SelectionDelta {
                        added: vec![id.to_string()],
                        removed: vec![],
                    }
                }
            }
        }
    }

    /// Toggle every ID on the visible page.
    ///
    /// When all `page_ids` are already selected they are deselected;
    /// otherwise the missing ones are selected. IDs outside the page are
    /// never touched. Only multiple mode supports this.
    pub fn toggle_page(&mut self, page_ids: &[String]) -> SelectionDelta {
        if self.mode != SelectionMode::Multiple || page_ids.is_empty() {
            return SelectionDelta::default();
        }

        if page_ids.iter().all(|id| self.selected.contains(id)) {
            let removed = page_ids
                .iter()
                .filter(|id| self.selected.remove(id.as_str()))
                .cloned()
                .collect();
            SelectionDelta {
                added: vec![],
                removed,
            }
        } else {
            let added = page_ids
                .iter()
                .filter(|id| self.selected.insert((*id).clone()))
                .cloned()
                .collect();
            SelectionDelta {
                added,
                removed: vec![],
            }
        }
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        self.selected.drain().collect()
    }

    /// Drop IDs for which `keep` returns false.
    /// Returns the IDs that were removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) -> Vec<String> {
        let removed: Vec<String> = self
            .selected
            .iter()
            .filter(|id| !keep(id))
            .cloned()
            .collect();
        for id in &removed {
            self.selected.remove(id);
        }
        removed
    }
}
