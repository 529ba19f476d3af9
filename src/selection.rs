//! Selection tracking for placed icons.
//!
//! The selection is transient side-state: not persisted, not part of the
//! undo history. After undo/redo it is pruned so it never names an icon the
//! document no longer contains.

use crate::types::{EditorState, IconId};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected: HashSet<IconId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &IconId) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Replace the selection with exactly one icon.
    pub fn select_only(&mut self, id: IconId) {
        self.selected.clear();
        self.selected.insert(id);
    }

    /// Replace the selection with `ids`.
    pub fn replace<I: IntoIterator<Item = IconId>>(&mut self, ids: I) {
        self.selected = ids.into_iter().collect();
    }

    pub fn insert(&mut self, id: IconId) -> bool {
        self.selected.insert(id)
    }

    pub fn remove(&mut self, id: &IconId) -> bool {
        self.selected.remove(id)
    }

    /// Add the icon if absent, remove it if present. Returns whether it is
    /// selected afterwards.
    pub fn toggle(&mut self, id: IconId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconId> {
        self.selected.iter()
    }

    /// Selected ids in document order, skipping any the document lacks.
    pub fn ordered_ids(&self, state: &EditorState) -> Vec<IconId> {
        state
            .icons
            .iter()
            .filter(|icon| self.selected.contains(&icon.id))
            .map(|icon| icon.id.clone())
            .collect()
    }

    /// Selected ids that may be moved or deleted (not on a locked layer),
    /// in document order.
    pub fn editable_ids(&self, state: &EditorState) -> Vec<IconId> {
        self.ordered_ids(state)
            .into_iter()
            .filter(|id| state.is_icon_editable(id))
            .collect()
    }

    /// Drop ids that no longer exist in `state`.
    pub fn prune(&mut self, state: &EditorState) {
        self.selected.retain(|id| state.has_icon(id));
    }
}
