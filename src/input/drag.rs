//! Pointer move handling - live drag preview, panning, marquee update.
//!
//! ## Performance Notes
//!
//! Pointer move fires 60+ times per second during a drag:
//! - Early exit for the idle state
//! - Each frame re-applies the total delta to the document captured at
//!   pointer-down, so no error accumulates and nothing is committed
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::InputState;
use super::events::PointerEvent;
use crate::app::MapEditor;
use crate::profile_scope;
use crate::types::clamp_percent;
use tracing::trace;

impl MapEditor {
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) {
        profile_scope!("handle_pointer_move");

        let pos = event.position;
        self.canvas.last_pointer_percent = Some(clamp_percent(self.screen_to_percent(pos)));

        match &self.canvas.input_state {
            InputState::Idle => {}
            InputState::Panning { last_pos } => {
                let delta = pos - *last_pos;
                self.canvas.transform = self.canvas.transform.panned_by(delta);
                self.canvas.input_state.update_last_pointer_pos(pos);
            }
            InputState::DraggingIcons {
                icon_ids,
                grab_percent,
                origin,
                ..
            } => {
                let delta = self.screen_to_percent(pos) - *grab_percent;
                let next = origin.move_icons_by(icon_ids, delta);
                trace!(dx = delta.x, dy = delta.y, count = icon_ids.len(), "Drag preview");
                self.preview(next);
            }
            InputState::MarqueeSelecting { .. } => {
                self.canvas.input_state.set_marquee_current(pos);
            }
        }
    }
}
