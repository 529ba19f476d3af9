//! Coordinate conversion utilities for canvas interactions.
//!
//! Three spaces are in play:
//!
//! - **screen**: window pixels, as reported by pointer events
//! - **canvas-local**: pixels inside the canvas element before the view
//!   transform is applied (`translate(pan) scale(zoom)` with origin 0,0)
//! - **percent**: canvas-local divided by the canvas extent, times 100.
//!   Every persisted icon position lives here.
//!
//! All conversions go through `CoordinateConverter` so that placing an icon
//! and dragging it use exactly inverse formulas.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use kurbo::{Point, Rect, Vec2};

/// Pan/zoom view state. Not part of the undo history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Translation in screen pixels applied after scaling
    pub pan: Vec2,
    pub zoom: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Inclusive zoom range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: MIN_ZOOM,
            max: MAX_ZOOM,
        }
    }
}

impl ZoomLimits {
    /// Build limits, swapping the bounds if they arrive inverted.
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    #[inline]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

impl ViewTransform {
    pub fn new(pan: Vec2, zoom: f64) -> Self {
        Self { pan, zoom }
    }

    /// Zoom so that the canvas point under `screen` stays under `screen`.
    ///
    /// `new_zoom` is clamped into `limits` before the pan is recomputed.
    pub fn zoom_at_point(
        &self,
        viewport: Rect,
        screen: Point,
        new_zoom: f64,
        limits: ZoomLimits,
    ) -> ViewTransform {
        let zoom = limits.clamp(new_zoom);
        let anchor = screen - viewport.origin();
        let local = (anchor - self.pan) / self.zoom;
        ViewTransform {
            pan: anchor - local * zoom,
            zoom,
        }
    }

    /// Translate the view by a screen-space delta.
    pub fn panned_by(&self, delta: Vec2) -> ViewTransform {
        ViewTransform {
            pan: self.pan + delta,
            zoom: self.zoom,
        }
    }
}

/// Context needed for coordinate conversions
#[derive(Debug, Clone, Copy)]
pub struct CoordinateContext<'a> {
    /// Canvas element bounds in screen space, untransformed
    pub viewport: Rect,
    pub transform: &'a ViewTransform,
}

impl<'a> CoordinateContext<'a> {
    /// Create a new coordinate context
    #[inline]
    pub fn new(viewport: Rect, transform: &'a ViewTransform) -> Self {
        Self {
            viewport,
            transform,
        }
    }

    #[inline]
    fn extent(&self) -> Vec2 {
        Vec2::new(
            self.viewport.width().max(f64::MIN_POSITIVE),
            self.viewport.height().max(f64::MIN_POSITIVE),
        )
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert screen position to canvas-local position
    #[inline]
    pub fn screen_to_canvas(screen: Point, ctx: &CoordinateContext<'_>) -> Point {
        ((screen - ctx.viewport.origin() - ctx.transform.pan) / ctx.transform.zoom).to_point()
    }

    /// Convert canvas-local position to screen position
    #[inline]
    pub fn canvas_to_screen(canvas: Point, ctx: &CoordinateContext<'_>) -> Point {
        ctx.viewport.origin() + ctx.transform.pan + canvas.to_vec2() * ctx.transform.zoom
    }

    /// Convert canvas-local position to canvas percentage
    #[inline]
    pub fn canvas_to_percent(canvas: Point, ctx: &CoordinateContext<'_>) -> Point {
        let extent = ctx.extent();
        Point::new(canvas.x / extent.x * 100.0, canvas.y / extent.y * 100.0)
    }

    /// Convert canvas percentage to canvas-local position
    #[inline]
    pub fn percent_to_canvas(percent: Point, ctx: &CoordinateContext<'_>) -> Point {
        let extent = ctx.extent();
        Point::new(percent.x / 100.0 * extent.x, percent.y / 100.0 * extent.y)
    }

    /// Convert screen position to canvas percentage (unclamped)
    #[inline]
    pub fn screen_to_percent(screen: Point, ctx: &CoordinateContext<'_>) -> Point {
        Self::canvas_to_percent(Self::screen_to_canvas(screen, ctx), ctx)
    }

    /// Convert canvas percentage to screen position
    #[inline]
    pub fn percent_to_screen(percent: Point, ctx: &CoordinateContext<'_>) -> Point {
        Self::canvas_to_screen(Self::percent_to_canvas(percent, ctx), ctx)
    }

    /// Convert a delta from screen pixels to canvas-local pixels
    #[inline]
    pub fn delta_screen_to_canvas(delta: Vec2, zoom: f64) -> Vec2 {
        delta / zoom
    }

    /// Convert a delta from screen pixels to canvas percentage
    #[inline]
    pub fn delta_screen_to_percent(delta: Vec2, ctx: &CoordinateContext<'_>) -> Vec2 {
        let local = Self::delta_screen_to_canvas(delta, ctx.transform.zoom);
        let extent = ctx.extent();
        Vec2::new(local.x / extent.x * 100.0, local.y / extent.y * 100.0)
    }
}
