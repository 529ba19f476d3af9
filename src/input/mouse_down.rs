//! Pointer down event handling - hit testing, connect clicks, drag/marquee/pan
//! initiation.
//!
//! ## Performance Notes
//!
//! Pointer down is a hot path during user interaction:
//! - O(log n) hit testing via the R-tree spatial index
//! - The index is only rebuilt when the document or viewport changed
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::connect::ConnectOutcome;
use super::events::{MouseButton, PointerEvent};
use crate::app::{MapEditor, Tool};
use crate::notifications::Toast;
use crate::profile_scope;
use crate::types::IconId;
use tracing::{debug, warn};

impl MapEditor {
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) {
        profile_scope!("handle_pointer_down");

        let pos = event.position;
        // A press without a matching release first finishes the stale
        // interaction as if it had been released
        if !self.canvas.input_state.is_idle() {
            let stale = self.finish_interaction();
            debug!(?stale, "Finished interaction left open by a lost release");
        }

        // Middle button, pan tool or held Shift always pans
        let wants_pan = event.button == MouseButton::Middle
            || (event.button == MouseButton::Left
                && (self.tools.selected == Tool::Pan || event.modifiers.shift));
        if wants_pan {
            self.canvas.input_state.start_panning(pos);
            return;
        }
        if event.button != MouseButton::Left {
            return;
        }

        match self.icon_at(pos) {
            Some(id) if self.tools.connect.is_active() => self.connect_click(&id),
            Some(id) if event.modifiers.secondary() => {
                let selected = self.canvas.selection.toggle(id.clone());
                debug!(icon = %id, selected, "Toggled selection");
            }
            Some(id) => self.begin_drag(id, pos),
            None if event.modifiers.secondary() => {
                self.canvas.input_state.start_marquee(pos);
            }
            None => {
                self.canvas.selection.clear();
                self.canvas.input_state.start_panning(pos);
            }
        }
    }

    fn begin_drag(&mut self, id: IconId, pos: kurbo::Point) {
        // Grabbing an icon outside the selection collapses to it; grabbing
        // one inside moves the whole group
        if !self.canvas.selection.contains(&id) {
            self.canvas.selection.select_only(id.clone());
        }
        let icon_ids = self.canvas.selection.editable_ids(self.state());
        if !icon_ids.contains(&id) {
            debug!(icon = %id, "Icon is on a locked layer, not dragging");
            return;
        }
        let grab_percent = self.screen_to_percent(pos);
        let origin = self.state().clone();
        debug!(primary = %id, count = icon_ids.len(), "Drag started");
        self.canvas
            .input_state
            .start_dragging(id, icon_ids, grab_percent, origin);
    }

    fn connect_click(&mut self, id: &IconId) {
        match self.tools.connect.click_icon(id, &self.document.current) {
            Ok(ConnectOutcome::Created { state, connector_id }) => {
                self.commit(state);
                debug!(connector = %connector_id, "Connector created");
                self.ui.toasts.push(Toast::success("Icons connected"));
            }
            Ok(ConnectOutcome::Started(start)) => {
                self.canvas.selection.select_only(start);
            }
            Ok(ConnectOutcome::Cancelled) => {
                self.canvas.selection.clear();
            }
            Ok(ConnectOutcome::Inactive) => {}
            Err(e) => {
                warn!(error = %e, "Connector rejected");
                self.ui.toasts.push(Toast::error(e.to_string()));
            }
        }
    }
}
