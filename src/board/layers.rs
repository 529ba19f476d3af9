//! Layer operations.
//!
//! At least one layer always exists. Display order is the order of
//! `EditorState::layers`; deleting a layer moves its icons onto the first
//! remaining layer in that order.

use crate::error::{EditorError, EditorResult};
use crate::types::{EditorState, Layer, LayerId};

impl EditorState {
    /// Append a new visible, unlocked layer and make it current.
    pub fn add_layer(&self, name: &str) -> EditorResult<(EditorState, LayerId)> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EditorError::EmptyName);
        }
        let id = LayerId::generate();
        let mut next = self.clone();
        next.layers.push(Layer::new(id.clone(), name));
        next.current_layer_id = id.clone();
        Ok((next, id))
    }

    pub fn rename_layer(&self, id: &LayerId, name: &str) -> EditorResult<EditorState> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EditorError::EmptyName);
        }
        self.with_layer(id, |layer| layer.name = name.to_string())
    }

    pub fn toggle_layer_visibility(&self, id: &LayerId) -> EditorResult<EditorState> {
        self.with_layer(id, |layer| layer.visible = !layer.visible)
    }

    pub fn toggle_layer_lock(&self, id: &LayerId) -> EditorResult<EditorState> {
        self.with_layer(id, |layer| layer.locked = !layer.locked)
    }

    pub fn set_layer_color(&self, id: &LayerId, color: Option<String>) -> EditorResult<EditorState> {
        self.with_layer(id, |layer| layer.color = color)
    }

    /// Move a layer to `to_index` in display order. Indices past the end
    /// move it to the top.
    pub fn reorder_layer(&self, id: &LayerId, to_index: usize) -> EditorResult<EditorState> {
        let from = self
            .layer_index(id)
            .ok_or_else(|| EditorError::layer_not_found(id.as_str()))?;
        let mut next = self.clone();
        let layer = next.layers.remove(from);
        let to = to_index.min(next.layers.len());
        next.layers.insert(to, layer);
        Ok(next)
    }

    /// Delete a layer, reassigning its icons to the first remaining layer.
    /// The last layer cannot be deleted.
    pub fn delete_layer(&self, id: &LayerId) -> EditorResult<EditorState> {
        let index = self
            .layer_index(id)
            .ok_or_else(|| EditorError::layer_not_found(id.as_str()))?;
        if self.layers.len() == 1 {
            return Err(EditorError::LastLayer);
        }

        let mut next = self.clone();
        next.layers.remove(index);
        let fallback = next.layers[0].id.clone();
        for icon in next.icons.iter_mut().filter(|icon| &icon.layer_id == id) {
            icon.layer_id = fallback.clone();
        }
        if &next.current_layer_id == id {
            next.current_layer_id = fallback;
        }
        Ok(next)
    }

    /// Choose the layer new icons are placed on.
    pub fn set_current_layer(&self, id: &LayerId) -> EditorResult<EditorState> {
        if !self.has_layer(id) {
            return Err(EditorError::layer_not_found(id.as_str()));
        }
        let mut next = self.clone();
        next.current_layer_id = id.clone();
        Ok(next)
    }

    fn with_layer(&self, id: &LayerId, f: impl FnOnce(&mut Layer)) -> EditorResult<EditorState> {
        let mut next = self.clone();
        let layer = next
            .layers
            .iter_mut()
            .find(|layer| &layer.id == id)
            .ok_or_else(|| EditorError::layer_not_found(id.as_str()))?;
        f(layer);
        Ok(next)
    }
}
