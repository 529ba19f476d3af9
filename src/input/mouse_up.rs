//! Pointer up / cancel handling - commit drags, finalize marquee selection.

use super::events::PointerEvent;
use super::{InputState, InteractionEnd};
use crate::app::MapEditor;
use crate::notifications::Toast;
use tracing::debug;

impl MapEditor {
    /// Release the pointer: apply the final position, then finish whatever
    /// interaction was in progress.
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) -> InteractionEnd {
        self.handle_pointer_move(event);
        self.finish_interaction()
    }

    /// Lost pointer capture. Ends the interaction exactly as a release at
    /// the last seen position would.
    pub fn handle_pointer_cancel(&mut self) -> InteractionEnd {
        self.finish_interaction()
    }

    pub(crate) fn finish_interaction(&mut self) -> InteractionEnd {
        match std::mem::take(&mut self.canvas.input_state) {
            InputState::Idle => InteractionEnd::None,
            InputState::Panning { .. } => InteractionEnd::PanEnded,
            InputState::DraggingIcons { icon_ids, .. } => {
                // One undo step for the whole drag
                let committed = self.commit_current();
                debug!(count = icon_ids.len(), committed, "Drag finished");
                InteractionEnd::DragCommitted { icon_ids, committed }
            }
            InputState::MarqueeSelecting { start, current } => {
                let rect = kurbo::Rect::from_points(start, current);
                let hits = self.icons_in_screen_rect(rect);
                let count = hits.len();
                self.canvas.selection.replace(hits);
                debug!(count, "Marquee selection");
                self.ui.toasts.push(Toast::info(format!("Selected {count} icon(s)")));
                InteractionEnd::MarqueeSelected { count }
            }
        }
    }

    /// Drop a marquee in progress without changing the selection.
    pub(crate) fn cancel_marquee(&mut self) -> bool {
        if self.canvas.input_state.is_marquee_selecting() {
            self.canvas.input_state.reset();
            return true;
        }
        false
    }
}
