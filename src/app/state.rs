//! Editor state - the MapEditor struct and its sub-structs.

use crate::clipboard::Clipboard;
use crate::glyphs::IconLibrary;
use crate::history::History;
use crate::input::InputState;
use crate::input::connect::ConnectState;
use crate::input::coords::ViewTransform;
use crate::notifications::ToastManager;
use crate::perf::HitTestProfiler;
use crate::selection::SelectionManager;
use crate::settings::EditorSettings;
use crate::spatial_index::SpatialIndex;
use crate::types::EditorState;
use kurbo::{Point, Rect};

/// Pointer tool chosen in the toolbar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Select,
    /// Every primary drag pans the canvas
    Pan,
}

/// Document state - the displayed document and its undo history
pub struct DocumentState {
    /// What is on screen. Equal to `history.current()` except during a live
    /// preview.
    pub current: EditorState,
    pub history: History<EditorState>,
}

/// Canvas interaction state - view transform, selection, pointer state
pub struct CanvasState {
    pub transform: ViewTransform,
    /// Canvas element bounds in screen space
    pub viewport: Rect,
    pub selection: SelectionManager,
    /// Input state machine for the current pointer interaction
    pub input_state: InputState,
    /// Last pointer position in percent space, clamped; the paste target
    pub last_pointer_percent: Option<Point>,
    /// Hit circles in canvas-local pixels
    pub spatial_index: SpatialIndex,
    /// Set whenever the document or viewport extent changes
    pub index_dirty: bool,
    pub hit_profiler: HitTestProfiler,
}

/// Tool state - toolbar tool and connect mode
pub struct ToolState {
    pub selected: Tool,
    pub connect: ConnectState,
}

/// UI state - toasts, clipboard, palette
pub struct UiState {
    pub toasts: ToastManager,
    pub clipboard: Clipboard,
    pub library: IconLibrary,
}

/// The editor - composed of focused sub-structs
pub struct MapEditor {
    pub document: DocumentState,
    pub canvas: CanvasState,
    pub tools: ToolState,
    pub ui: UiState,
    pub settings: EditorSettings,
}
