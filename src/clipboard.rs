//! Copy/paste buffer for placed icons.
//!
//! Copies are taken by value, so later edits to the originals never leak
//! into the buffer. Pasting re-creates every icon under a fresh id around
//! the paste point, keeping each icon's offset from the group centroid.

use crate::types::{EditorState, IconId, LayerId, PlacedIcon, clamp_percent};
use kurbo::{Point, Vec2};

#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    icons: Vec<PlacedIcon>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn icons(&self) -> &[PlacedIcon] {
        &self.icons
    }

    /// Snapshot `ids` out of `state`. Returns the number of icons copied.
    /// An empty id list leaves the buffer untouched.
    pub fn copy(&mut self, state: &EditorState, ids: &[IconId]) -> usize {
        let copied: Vec<PlacedIcon> = state
            .icons
            .iter()
            .filter(|icon| ids.contains(&icon.id))
            .cloned()
            .collect();
        if copied.is_empty() {
            return 0;
        }
        self.icons = copied;
        self.icons.len()
    }

    /// Mean position of the buffered icons.
    pub fn centroid(&self) -> Option<Point> {
        if self.icons.is_empty() {
            return None;
        }
        let sum = self
            .icons
            .iter()
            .fold(Vec2::ZERO, |acc, icon| acc + icon.position.to_vec2());
        Some((sum / self.icons.len() as f64).to_point())
    }

    /// Build the icons a paste at `at` (percent space) would insert.
    ///
    /// Each copy gets a fresh id and sits at `at + (original - centroid)`,
    /// clamped into the canvas. A copy keeps its layer if `state` still has
    /// it, otherwise it lands on `fallback_layer`.
    pub fn materialize(&self, at: Point, state: &EditorState, fallback_layer: &LayerId) -> Vec<PlacedIcon> {
        let Some(centroid) = self.centroid() else {
            return Vec::new();
        };
        self.icons
            .iter()
            .map(|icon| {
                let mut copy = icon.clone();
                copy.id = IconId::generate();
                copy.position = clamp_percent(at + (icon.position - centroid));
                if !state.has_layer(&copy.layer_id) {
                    copy.layer_id = fallback_layer.clone();
                }
                copy
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.icons.clear();
    }
}
