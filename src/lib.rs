//! Mapboard - the editing core of a venue floor-plan map editor.
//!
//! Icons are placed on a canvas in percentage coordinates, linked by
//! connectors and grouped into layers. `MapEditor` routes toolkit-neutral
//! pointer, wheel, key and drop events into pure `EditorState` operations
//! and records committed states in an undo history.
//!
//! ## Modules
//!
//! - `types` / `board` - the document model and its pure operations
//! - `history` - bounded undo/redo over whole-state snapshots
//! - `input` - coordinate spaces, input state machines, event handlers
//! - `app` - the `MapEditor` controller
//! - `selection` / `clipboard` / `spatial_index` - interaction support
//! - `persistence` - JSON export/import and the session document store
//! - `glyphs` - the icon palette and glyph resolution
//! - `settings` / `logging` / `notifications` / `perf` - ambient services

pub mod app;
pub mod board;
pub mod clipboard;
pub mod constants;
pub mod error;
pub mod glyphs;
pub mod history;
pub mod input;
pub mod logging;
pub mod notifications;
pub mod perf;
pub mod persistence;
pub mod selection;
pub mod settings;
pub mod spatial_index;
pub mod types;

pub use app::{MapEditor, Tool};
pub use error::{EditorError, EditorResult};
pub use history::History;
pub use types::{
    Connector, ConnectorId, EditorState, IconId, IconType, Layer, LayerId, PlacedIcon,
};
