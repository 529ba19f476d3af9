//! Placed icon operations.

use crate::constants::DUPLICATE_MAX;
use crate::error::{EditorError, EditorResult};
use crate::types::{
    EditorState, IconId, IconPatch, IconType, LayerId, PlacedIcon, clamp_icon_size, clamp_percent,
};
use kurbo::{Point, Vec2};
use std::collections::HashSet;

impl EditorState {
    /// Append a new icon with a fresh id, rotation 0 and size 1.
    ///
    /// The label defaults to the type key. Fails with `NotFound` if
    /// `layer_id` names no layer.
    pub fn add_icon(
        &self,
        type_key: &str,
        position: Point,
        layer_id: &LayerId,
    ) -> EditorResult<(EditorState, IconId)> {
        if !self.has_layer(layer_id) {
            return Err(EditorError::layer_not_found(layer_id.as_str()));
        }
        let id = IconId::generate();
        let icon = PlacedIcon::new(id.clone(), type_key, type_key, position, layer_id.clone());
        let mut next = self.clone();
        next.icons.push(icon);
        Ok((next, id))
    }

    /// Append a new icon carrying a palette entry's label and color.
    pub fn add_icon_of_type(
        &self,
        icon_type: &IconType,
        position: Point,
        layer_id: &LayerId,
    ) -> EditorResult<(EditorState, IconId)> {
        if !self.has_layer(layer_id) {
            return Err(EditorError::layer_not_found(layer_id.as_str()));
        }
        let id = IconId::generate();
        let mut icon = PlacedIcon::new(
            id.clone(),
            &icon_type.type_key,
            &icon_type.label,
            position,
            layer_id.clone(),
        );
        if let Some(color) = &icon_type.color {
            icon = icon.with_color(color);
        }
        let mut next = self.clone();
        next.icons.push(icon);
        Ok((next, id))
    }

    /// Append already-built icons (paste). Every icon id must be new and
    /// every layer must exist; otherwise nothing is inserted.
    pub fn insert_icons(&self, icons: Vec<PlacedIcon>) -> EditorResult<EditorState> {
        for icon in &icons {
            if self.has_icon(&icon.id) {
                return Err(EditorError::InvalidImportFormat(format!(
                    "duplicate icon id {}",
                    icon.id
                )));
            }
            if !self.has_layer(&icon.layer_id) {
                return Err(EditorError::layer_not_found(icon.layer_id.as_str()));
            }
        }
        let mut next = self.clone();
        next.icons.extend(icons.into_iter().map(|mut icon| {
            icon.position = clamp_percent(icon.position);
            icon.size = clamp_icon_size(icon.size);
            icon
        }));
        Ok(next)
    }

    /// Merge a partial update into one icon.
    pub fn update_icon(&self, id: &IconId, patch: IconPatch) -> EditorResult<EditorState> {
        if !self.has_icon(id) {
            return Err(EditorError::icon_not_found(id.as_str()));
        }
        if let Some(layer_id) = &patch.layer_id {
            if !self.has_layer(layer_id) {
                return Err(EditorError::layer_not_found(layer_id.as_str()));
            }
        }
        let mut next = self.clone();
        if let Some(icon) = next.icon_mut(id) {
            patch.apply(icon);
        }
        Ok(next)
    }

    /// Remove an icon and every connector that references it.
    pub fn delete_icon(&self, id: &IconId) -> EditorResult<EditorState> {
        if !self.has_icon(id) {
            return Err(EditorError::icon_not_found(id.as_str()));
        }
        Ok(self.delete_icons(std::slice::from_ref(id)))
    }

    /// Remove a set of icons and cascade their connectors. Unknown ids are
    /// ignored.
    pub fn delete_icons(&self, ids: &[IconId]) -> EditorState {
        let doomed: HashSet<&IconId> = ids.iter().collect();
        let mut next = self.clone();
        next.icons.retain(|icon| !doomed.contains(&icon.id));
        next.connectors
            .retain(|conn| !doomed.contains(&conn.start_icon_id) && !doomed.contains(&conn.end_icon_id));
        next
    }

    /// Translate a set of icons by a percent-space delta. Each icon is
    /// clamped into `[0, 100]` independently. Unknown ids are ignored.
    pub fn move_icons_by(&self, ids: &[IconId], delta: Vec2) -> EditorState {
        let moving: HashSet<&IconId> = ids.iter().collect();
        let mut next = self.clone();
        for icon in next.icons.iter_mut().filter(|icon| moving.contains(&icon.id)) {
            icon.position = clamp_percent(icon.position + delta);
        }
        next
    }

    /// Rotate an icon by `degrees`. The result is not normalized.
    pub fn rotate_icon_by(&self, id: &IconId, degrees: f64) -> EditorResult<EditorState> {
        let icon = self.icon(id).ok_or_else(|| EditorError::icon_not_found(id.as_str()))?;
        let rotation = icon.rotation + degrees;
        self.update_icon(id, IconPatch::new().rotation(rotation))
    }

    /// Grow or shrink an icon by `delta`, clamped to `[0.5, 3.0]`.
    pub fn resize_icon_by(&self, id: &IconId, delta: f64) -> EditorResult<EditorState> {
        let icon = self.icon(id).ok_or_else(|| EditorError::icon_not_found(id.as_str()))?;
        let size = icon.size + delta;
        self.update_icon(id, IconPatch::new().size(size))
    }

    /// Copy an icon under a fresh id, shifted by `offset` on both axes and
    /// kept within `[0, 95]`.
    pub fn duplicate_icon(&self, id: &IconId, offset: f64) -> EditorResult<(EditorState, IconId)> {
        let source = self.icon(id).ok_or_else(|| EditorError::icon_not_found(id.as_str()))?;
        let new_id = IconId::generate();
        let mut copy = source.clone();
        copy.id = new_id.clone();
        copy.position = Point::new(
            (source.position.x + offset).clamp(0.0, DUPLICATE_MAX),
            (source.position.y + offset).clamp(0.0, DUPLICATE_MAX),
        );
        let mut next = self.clone();
        next.icons.push(copy);
        Ok((next, new_id))
    }

    pub(crate) fn icon_mut(&mut self, id: &IconId) -> Option<&mut PlacedIcon> {
        self.icons.iter_mut().find(|icon| &icon.id == id)
    }
}
