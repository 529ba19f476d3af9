//! Palette drops - an icon type dragged from the palette onto the canvas.

use super::events::DropEvent;
use crate::app::MapEditor;
use crate::error::{EditorError, EditorResult};
use crate::notifications::Toast;
use crate::types::{IconId, IconType, clamp_percent};
use tracing::{info, warn};

impl MapEditor {
    /// Place the dropped icon type under the drop point on the current layer
    /// and commit.
    pub fn handle_drop(&mut self, event: &DropEvent) -> EditorResult<IconId> {
        let icon_type: IconType = match serde_json::from_str(&event.payload) {
            Ok(icon_type) => icon_type,
            Err(e) => {
                let err = EditorError::InvalidDropPayload(e.to_string());
                warn!(error = %err, "Drop rejected");
                self.ui.toasts.push(Toast::error(err.to_string()));
                return Err(err);
            }
        };

        let position = clamp_percent(self.screen_to_percent(event.position));
        let layer = self.state().current_layer_id.clone();
        let (next, id) = self.state().add_icon_of_type(&icon_type, position, &layer)?;
        self.commit(next);
        info!(icon = %id, type_key = %icon_type.type_key, x = position.x, y = position.y, "Dropped icon");
        Ok(id)
    }
}
