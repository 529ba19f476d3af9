//! Pointer, wheel, keyboard and drop input handling for the canvas.
//!
//! This module implements all canvas interaction logic for the map editor:
//! icon selection and dragging, marquee selection, panning, wheel zoom,
//! connect mode, keyboard shortcuts and palette drops.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction mode. Connect mode is a separate machine
//! (`ConnectState`) because it spans many pointer gestures.
//!
//! ## Modules
//!
//! - `coords` - Coordinate spaces and the pan/zoom transform
//! - `events` - Toolkit-neutral pointer, scroll, key and drop events
//! - `state` - Input state machine enum and helper methods
//! - `connect` - Two-click connector protocol
//! - `mouse_down` - Pointer down (hit testing, drag/marquee/pan start)
//! - `drag` - Pointer move (live drag preview, pan, marquee update)
//! - `mouse_up` - Pointer up/cancel (commit or finalize the interaction)
//! - `transform` - Wheel zoom and the zoom buttons
//! - `keyboard` - Shortcuts
//! - `drop` - Palette drops

pub mod coords;
pub mod connect;
pub mod events;
mod state;
mod mouse_down;
mod drag;
mod mouse_up;
mod transform;
mod keyboard;
mod drop;

pub use state::InputState;

use crate::types::IconId;

/// How a pointer interaction ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionEnd {
    /// Nothing was in progress
    None,
    /// A drag finished. `committed` is false when the icons ended where
    /// they started and no undo step was recorded.
    DragCommitted { icon_ids: Vec<IconId>, committed: bool },
    /// A marquee finished and replaced the selection with `count` icons
    MarqueeSelected { count: usize },
    PanEnded,
}
