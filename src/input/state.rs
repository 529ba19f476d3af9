//! Input state machine - unified state for pointer interactions.
//!
//! A single explicit enum instead of scattered flags, so that impossible
//! combinations (dragging while marquee-selecting) cannot be represented.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingIcons        (primary down on an icon, no modifier)
//! Idle -> MarqueeSelecting     (primary down on empty canvas with Ctrl/Cmd)
//! Idle -> Panning              (down on empty canvas, middle button, Shift, or pan tool)
//!
//! Any -> Idle                  (pointer up or lost capture - finalizes operation)
//! ```

use crate::types::{EditorState, IconId};
use kurbo::{Point, Rect};

/// Unified input state for all pointer interactions.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No active input operation
    #[default]
    Idle,

    /// Canvas panning
    Panning {
        /// Last pointer position (screen) for delta calculation
        last_pos: Point,
    },

    /// Dragging one or more icons
    DraggingIcons {
        /// Icon under the pointer when the drag started
        primary: IconId,
        /// Every icon moving with this drag
        icon_ids: Vec<IconId>,
        /// Pointer position in percent space at pointer-down
        grab_percent: Point,
        /// Document at pointer-down; each frame re-applies the total delta to it
        origin: Box<EditorState>,
    },

    /// Marquee/box selection, corners in screen space
    MarqueeSelecting { start: Point, current: Point },
}

impl InputState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if currently panning the canvas
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Returns true if currently dragging icons
    pub fn is_dragging_icons(&self) -> bool {
        matches!(self, Self::DraggingIcons { .. })
    }

    /// Returns true if currently marquee selecting
    pub fn is_marquee_selecting(&self) -> bool {
        matches!(self, Self::MarqueeSelecting { .. })
    }

    /// Get the icon under the pointer when the drag started
    pub fn dragged_icon_id(&self) -> Option<&IconId> {
        match self {
            Self::DraggingIcons { primary, .. } => Some(primary),
            _ => None,
        }
    }

    /// Get every icon moving with the current drag
    pub fn dragged_icon_ids(&self) -> &[IconId] {
        match self {
            Self::DraggingIcons { icon_ids, .. } => icon_ids,
            _ => &[],
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Start panning
    pub fn start_panning(&mut self, pos: Point) {
        *self = Self::Panning { last_pos: pos };
    }

    /// Start dragging icons
    pub fn start_dragging(
        &mut self,
        primary: IconId,
        icon_ids: Vec<IconId>,
        grab_percent: Point,
        origin: EditorState,
    ) {
        *self = Self::DraggingIcons {
            primary,
            icon_ids,
            grab_percent,
            origin: Box::new(origin),
        };
    }

    /// Start marquee selection
    pub fn start_marquee(&mut self, start: Point) {
        *self = Self::MarqueeSelecting {
            start,
            current: start,
        };
    }

    /// Update marquee current position
    pub fn set_marquee_current(&mut self, current: Point) {
        if let Self::MarqueeSelecting { current: c, .. } = self {
            *c = current;
        }
    }

    /// Marquee rectangle in screen space, normalized so that x0 <= x1 and
    /// y0 <= y1 regardless of drag direction
    pub fn marquee_rect(&self) -> Option<Rect> {
        match self {
            Self::MarqueeSelecting { start, current } => Some(Rect::from_points(*start, *current)),
            _ => None,
        }
    }

    /// Get last pointer position (for panning)
    pub fn last_pointer_pos(&self) -> Option<Point> {
        match self {
            Self::Panning { last_pos } => Some(*last_pos),
            _ => None,
        }
    }

    /// Update last pointer position (for panning)
    pub fn update_last_pointer_pos(&mut self, pos: Point) {
        if let Self::Panning { last_pos } = self {
            *last_pos = pos;
        }
    }
}
