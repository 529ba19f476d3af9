//! Canvas transformations - wheel zoom, zoom buttons, view reset.
//!
//! Every zoom goes through `ViewTransform::zoom_at_point`, so the canvas
//! point under the anchor stays put. The transform is view state only and
//! never touches history.

use super::coords::ViewTransform;
use super::events::ScrollWheelEvent;
use crate::app::MapEditor;
use kurbo::Point;
use tracing::trace;

impl MapEditor {
    /// Wheel zoom anchored at the cursor: one step per event, towards the
    /// user zooms out.
    pub fn handle_scroll(&mut self, event: &ScrollWheelEvent) {
        let dy = event.delta.y();
        if dy == 0.0 {
            return;
        }
        let step = self.settings.wheel_zoom_step * dy.signum();
        let new_zoom = self.canvas.transform.zoom - step;
        self.zoom_to(new_zoom, event.position);
        trace!(zoom = self.canvas.transform.zoom, "Wheel zoom");
    }

    /// Zoom to `new_zoom` (clamped) keeping the canvas point under `anchor`
    /// fixed on screen.
    pub fn zoom_to(&mut self, new_zoom: f64, anchor: Point) {
        self.canvas.transform = self.canvas.transform.zoom_at_point(
            self.canvas.viewport,
            anchor,
            new_zoom,
            self.settings.zoom_limits(),
        );
    }

    pub fn zoom_in(&mut self) {
        let zoom = self.canvas.transform.zoom + self.settings.button_zoom_step;
        self.zoom_to(zoom, self.canvas.viewport.center());
    }

    pub fn zoom_out(&mut self) {
        let zoom = self.canvas.transform.zoom - self.settings.button_zoom_step;
        self.zoom_to(zoom, self.canvas.viewport.center());
    }

    pub fn reset_view(&mut self) {
        self.canvas.transform = ViewTransform::default();
    }

    /// Zoom level for the toolbar readout, e.g. `125` for 1.25x
    pub fn zoom_percent(&self) -> u32 {
        (self.canvas.transform.zoom * 100.0).round() as u32
    }
}
