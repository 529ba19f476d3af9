//! Document commands - discrete edits that commit immediately.
//!
//! Each command runs one entity-model operation against the displayed
//! document and commits the result. Rejections leave the document alone,
//! log a warning and raise an error toast; a missing id is a quiet no-op.

use super::MapEditor;
use crate::constants::CANVAS_CENTER;
use crate::error::{EditorError, EditorResult};
use crate::notifications::Toast;
use crate::types::{
    ConnectorId, ConnectorPatch, EditorState, IconId, IconPatch, IconType, LayerId,
};
use kurbo::Point;
use tracing::{debug, warn};

impl MapEditor {
    /// Commit `result`, or report why it was rejected. Returns whether the
    /// operation succeeded.
    pub(crate) fn apply_edit(&mut self, action: &str, result: EditorResult<EditorState>) -> bool {
        match result {
            Ok(next) => {
                self.commit(next);
                true
            }
            Err(e) => {
                self.report(action, &e);
                false
            }
        }
    }

    pub(crate) fn report(&mut self, action: &str, error: &EditorError) {
        if error.is_not_found() {
            debug!(action, %error, "Ignored edit on missing entity");
            return;
        }
        warn!(action, %error, "Edit rejected");
        self.ui.toasts.push(Toast::error(error.to_string()));
    }

    fn ensure_editable(&self, id: &IconId) -> EditorResult<()> {
        let state = self.state();
        if !state.has_icon(id) {
            return Err(EditorError::icon_not_found(id.as_str()));
        }
        if !state.is_icon_editable(id) {
            return Err(EditorError::LockedLayer(id.to_string()));
        }
        Ok(())
    }

    // ==================== Icons ====================

    /// Click-to-place: add a palette icon at the canvas centre on the
    /// current layer.
    pub fn place_icon(&mut self, icon_type: &IconType) -> Option<IconId> {
        let center = Point::new(CANVAS_CENTER.0, CANVAS_CENTER.1);
        let layer = self.state().current_layer_id.clone();
        match self.state().add_icon_of_type(icon_type, center, &layer) {
            Ok((next, id)) => {
                self.commit(next);
                Some(id)
            }
            Err(e) => {
                self.report("place_icon", &e);
                None
            }
        }
    }

    /// Click-to-place by palette key. Unknown keys place the fallback pin.
    pub fn place_icon_by_key(&mut self, type_key: &str) -> Option<IconId> {
        let icon_type = self.ui.library.resolve(type_key).clone();
        self.place_icon(&icon_type)
    }

    /// Merge a partial update. Moving an icon, or reassigning its layer,
    /// is refused while it sits on a locked layer.
    pub fn update_icon(&mut self, id: &IconId, patch: IconPatch) -> bool {
        let result = if patch.position.is_some() || patch.layer_id.is_some() {
            self.ensure_editable(id)
                .and_then(|()| self.state().update_icon(id, patch))
        } else {
            self.state().update_icon(id, patch)
        };
        self.apply_edit("update_icon", result)
    }

    pub fn rotate_icon(&mut self, id: &IconId, degrees: f64) -> bool {
        let result = self.state().rotate_icon_by(id, degrees);
        self.apply_edit("rotate_icon", result)
    }

    pub fn resize_icon(&mut self, id: &IconId, delta: f64) -> bool {
        let result = self.state().resize_icon_by(id, delta);
        self.apply_edit("resize_icon", result)
    }

    /// Copy an icon beside the original and select the copy.
    pub fn duplicate_icon(&mut self, id: &IconId) -> Option<IconId> {
        let offset = self.settings.duplicate_offset;
        match self.state().duplicate_icon(id, offset) {
            Ok((next, copy)) => {
                self.commit(next);
                self.canvas.selection.select_only(copy.clone());
                Some(copy)
            }
            Err(e) => {
                self.report("duplicate_icon", &e);
                None
            }
        }
    }

    /// Delete one icon and its connectors. Icons on locked layers are
    /// refused.
    pub fn delete_icon(&mut self, id: &IconId) -> bool {
        let result = self
            .ensure_editable(id)
            .and_then(|()| self.state().delete_icon(id));
        let ok = self.apply_edit("delete_icon", result);
        if ok {
            self.canvas.selection.remove(id);
        }
        ok
    }

    /// Delete every selected icon not on a locked layer, then clear the
    /// selection. Returns how many were deleted.
    pub fn delete_selected(&mut self) -> usize {
        let ids = self.canvas.selection.editable_ids(self.state());
        if ids.is_empty() {
            return 0;
        }
        let next = self.state().delete_icons(&ids);
        self.commit(next);
        self.canvas.selection.clear();
        debug!(count = ids.len(), "Deleted selection");
        ids.len()
    }

    // ==================== Connectors ====================

    /// Link two icons directly (outside connect mode).
    pub fn connect_icons(&mut self, start: &IconId, end: &IconId) -> Option<ConnectorId> {
        match self.state().add_connector(start, end) {
            Ok((next, id)) => {
                self.commit(next);
                Some(id)
            }
            Err(e) => {
                self.report("connect_icons", &e);
                None
            }
        }
    }

    pub fn update_connector(&mut self, id: &ConnectorId, patch: ConnectorPatch) -> bool {
        let result = self.state().update_connector(id, patch);
        self.apply_edit("update_connector", result)
    }

    pub fn delete_connector(&mut self, id: &ConnectorId) -> bool {
        let result = self.state().delete_connector(id);
        self.apply_edit("delete_connector", result)
    }

    pub fn toggle_connect_mode(&mut self) {
        self.tools.connect.toggle();
        debug!(active = self.tools.connect.is_active(), "Connect mode toggled");
    }

    // ==================== Layers ====================

    pub fn add_layer(&mut self, name: &str) -> Option<LayerId> {
        match self.state().add_layer(name) {
            Ok((next, id)) => {
                self.commit(next);
                Some(id)
            }
            Err(e) => {
                self.report("add_layer", &e);
                None
            }
        }
    }

    pub fn rename_layer(&mut self, id: &LayerId, name: &str) -> bool {
        let result = self.state().rename_layer(id, name);
        self.apply_edit("rename_layer", result)
    }

    pub fn toggle_layer_visibility(&mut self, id: &LayerId) -> bool {
        let result = self.state().toggle_layer_visibility(id);
        self.apply_edit("toggle_layer_visibility", result)
    }

    pub fn toggle_layer_lock(&mut self, id: &LayerId) -> bool {
        let result = self.state().toggle_layer_lock(id);
        self.apply_edit("toggle_layer_lock", result)
    }

    pub fn set_layer_color(&mut self, id: &LayerId, color: Option<String>) -> bool {
        let result = self.state().set_layer_color(id, color);
        self.apply_edit("set_layer_color", result)
    }

    pub fn reorder_layer(&mut self, id: &LayerId, to_index: usize) -> bool {
        let result = self.state().reorder_layer(id, to_index);
        self.apply_edit("reorder_layer", result)
    }

    pub fn delete_layer(&mut self, id: &LayerId) -> bool {
        let result = self.state().delete_layer(id);
        self.apply_edit("delete_layer", result)
    }

    pub fn set_current_layer(&mut self, id: &LayerId) -> bool {
        let result = self.state().set_current_layer(id);
        self.apply_edit("set_current_layer", result)
    }

    // ==================== Clipboard ====================

    /// Copy the selection into the clipboard. Returns how many icons were
    /// copied; an empty selection leaves the clipboard as it was.
    pub fn copy_selection(&mut self) -> usize {
        let ids = self.canvas.selection.ordered_ids(self.state());
        let copied = self.ui.clipboard.copy(&self.document.current, &ids);
        if copied > 0 {
            self.ui.toasts.push(Toast::success(format!("Copied {copied} icon(s)")));
        }
        copied
    }

    /// Paste the clipboard around the last pointer position (the canvas
    /// centre if the pointer has not been over the canvas), select the new
    /// icons, and return them. An empty clipboard only raises a warning.
    pub fn paste(&mut self) -> Vec<IconId> {
        if self.ui.clipboard.is_empty() {
            self.ui.toasts.push(Toast::warning("Nothing to paste"));
            return Vec::new();
        }
        let at = self
            .canvas
            .last_pointer_percent
            .unwrap_or(Point::new(CANVAS_CENTER.0, CANVAS_CENTER.1));
        let layer = self.state().current_layer_id.clone();
        let icons = self.ui.clipboard.materialize(at, self.state(), &layer);
        let ids: Vec<IconId> = icons.iter().map(|icon| icon.id.clone()).collect();

        match self.state().insert_icons(icons) {
            Ok(next) => {
                self.commit(next);
                self.canvas.selection.replace(ids.iter().cloned());
                self.ui.toasts.push(Toast::success(format!("Pasted {} icon(s)", ids.len())));
                ids
            }
            Err(e) => {
                self.report("paste", &e);
                Vec::new()
            }
        }
    }
}
