//! Editor lifecycle - construction, preview/commit, undo/redo, hit testing.
//!
//! ## Preview vs. commit
//!
//! `preview` replaces the displayed document and nothing else. `commit`
//! replaces it and records an undo step. Continuous interactions call
//! `preview` per frame and `commit` once when they end.

use super::MapEditor;
use super::state::{CanvasState, DocumentState, Tool, ToolState, UiState};
use crate::clipboard::Clipboard;
use crate::glyphs::IconLibrary;
use crate::history::History;
use crate::input::InputState;
use crate::input::connect::ConnectState;
use crate::input::coords::{CoordinateContext, CoordinateConverter, ViewTransform};
use crate::notifications::ToastManager;
use crate::perf::{HitTestProfiler, measure};
use crate::profile_scope;
use crate::selection::SelectionManager;
use crate::settings::EditorSettings;
use crate::spatial_index::SpatialIndex;
use crate::types::{EditorState, IconId};
use kurbo::{Point, Rect};
use tracing::debug;

/// Viewport used until the host reports the real canvas bounds
const DEFAULT_VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);

impl Default for MapEditor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl MapEditor {
    /// An editor over an empty document with only the default layer.
    pub fn new(settings: EditorSettings) -> Self {
        Self::with_state(EditorState::new(), settings)
    }

    /// An editor over `state`, which becomes the oldest undo entry.
    pub fn with_state(state: EditorState, settings: EditorSettings) -> Self {
        let settings = settings.normalized();
        Self {
            document: DocumentState {
                current: state.clone(),
                history: History::with_limit(state, settings.max_history),
            },
            canvas: CanvasState {
                transform: ViewTransform::default(),
                viewport: DEFAULT_VIEWPORT,
                selection: SelectionManager::new(),
                input_state: InputState::default(),
                last_pointer_percent: None,
                spatial_index: SpatialIndex::new(),
                index_dirty: true,
                hit_profiler: HitTestProfiler::new(),
            },
            tools: ToolState {
                selected: Tool::default(),
                connect: ConnectState::default(),
            },
            ui: UiState {
                toasts: ToastManager::new(),
                clipboard: Clipboard::new(),
                library: IconLibrary::default(),
            },
            settings,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.document.current
    }

    pub fn history(&self) -> &History<EditorState> {
        &self.document.history
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.canvas.transform
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.canvas.selection
    }

    pub fn input_state(&self) -> &InputState {
        &self.canvas.input_state
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.ui.toasts
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tools.selected = tool;
    }

    /// Report the canvas element's bounds in screen space.
    pub fn set_viewport(&mut self, viewport: Rect) {
        if viewport.size() != self.canvas.viewport.size() {
            self.canvas.index_dirty = true;
        }
        self.canvas.viewport = viewport;
    }

    pub fn viewport(&self) -> Rect {
        self.canvas.viewport
    }

    pub fn coordinate_context(&self) -> CoordinateContext<'_> {
        CoordinateContext::new(self.canvas.viewport, &self.canvas.transform)
    }

    /// Screen position to canvas percent, unclamped.
    pub fn screen_to_percent(&self, screen: Point) -> Point {
        CoordinateConverter::screen_to_percent(screen, &self.coordinate_context())
    }

    pub fn percent_to_screen(&self, percent: Point) -> Point {
        CoordinateConverter::percent_to_screen(percent, &self.coordinate_context())
    }

    // ------------------------------------------------------------------
    // Preview / commit
    // ------------------------------------------------------------------

    /// Show `state` without recording an undo step.
    pub fn preview(&mut self, state: EditorState) {
        self.document.current = state;
        self.canvas.index_dirty = true;
    }

    /// Show `state` and record it as an undo step. Returns false when it
    /// equals the last committed state and nothing was recorded.
    ///
    /// A commit during an icon drag ends the drag first, recording the
    /// previewed positions as their own undo step.
    pub fn commit(&mut self, state: EditorState) -> bool {
        if self.canvas.input_state.is_dragging_icons() {
            self.canvas.input_state.reset();
            let previewed = self.document.current.clone();
            self.record(previewed);
            debug!("Drag ended by a discrete edit");
        }
        self.record(state)
    }

    fn record(&mut self, state: EditorState) -> bool {
        self.document.current = state.clone();
        self.canvas.index_dirty = true;
        let recorded = self.document.history.commit(state);
        if recorded {
            debug!(
                cursor = self.document.history.cursor(),
                entries = self.document.history.len(),
                "Committed history entry"
            );
        }
        recorded
    }

    /// Commit whatever is currently displayed (ends a live preview).
    pub fn commit_current(&mut self) -> bool {
        self.commit(self.document.current.clone())
    }

    pub fn can_undo(&self) -> bool {
        self.document.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.document.history.can_redo()
    }

    /// Step back one committed state. Returns false at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        let state = self.document.history.undo().clone();
        self.restore(state);
        debug!(cursor = self.document.history.cursor(), "Undo");
        true
    }

    /// Step forward one committed state. Returns false at the newest entry.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        let state = self.document.history.redo().clone();
        self.restore(state);
        debug!(cursor = self.document.history.cursor(), "Redo");
        true
    }

    fn restore(&mut self, state: EditorState) {
        self.canvas.input_state.reset();
        self.document.current = state;
        self.canvas.selection.prune(&self.document.current);
        self.canvas.index_dirty = true;
    }

    /// Replace the document and start a fresh history from it.
    pub fn load_state(&mut self, state: EditorState) {
        self.canvas.input_state.reset();
        self.tools.connect.exit();
        self.canvas.selection.clear();
        self.document.history.reset(state.clone());
        self.document.current = state;
        self.canvas.index_dirty = true;
    }

    // ------------------------------------------------------------------
    // Hit testing
    // ------------------------------------------------------------------

    fn ensure_spatial_index(&mut self) {
        if !self.canvas.index_dirty {
            return;
        }
        let transform = self.canvas.transform;
        let ctx = CoordinateContext::new(self.canvas.viewport, &transform);
        self.canvas.spatial_index.rebuild(
            self.document.current.icons.iter(),
            self.settings.icon_hit_radius,
            |p| CoordinateConverter::percent_to_canvas(p, &ctx),
        );
        self.canvas.index_dirty = false;
    }

    /// Topmost visible icon under a screen position: highest layer in
    /// display order first, then the most recently added.
    pub fn icon_at(&mut self, screen: Point) -> Option<IconId> {
        profile_scope!("icon_at");
        self.ensure_spatial_index();

        let local = CoordinateConverter::screen_to_canvas(screen, &self.coordinate_context());
        let (candidates, elapsed) = measure(|| self.canvas.spatial_index.query_point(local));
        self.canvas.hit_profiler.record(candidates.len(), elapsed);

        let state = &self.document.current;
        state
            .icons
            .iter()
            .enumerate()
            .filter(|(_, icon)| candidates.contains(&icon.id) && state.is_icon_visible(&icon.id))
            .max_by_key(|(order, icon)| (state.layer_index(&icon.layer_id).unwrap_or(0), *order))
            .map(|(_, icon)| icon.id.clone())
    }

    /// Visible icons whose centre lies in a screen-space rectangle, in
    /// document order.
    pub fn icons_in_screen_rect(&mut self, rect: Rect) -> Vec<IconId> {
        self.ensure_spatial_index();
        let ctx = self.coordinate_context();
        let local = Rect::from_points(
            CoordinateConverter::screen_to_canvas(Point::new(rect.x0, rect.y0), &ctx),
            CoordinateConverter::screen_to_canvas(Point::new(rect.x1, rect.y1), &ctx),
        );
        let hits = self.canvas.spatial_index.query_rect(local);
        let state = &self.document.current;
        state
            .icons
            .iter()
            .filter(|icon| hits.contains(&icon.id) && state.is_icon_visible(&icon.id))
            .map(|icon| icon.id.clone())
            .collect()
    }
}
