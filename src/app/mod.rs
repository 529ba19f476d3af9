//! Application module - the editor controller.
//!
//! This module is organized into several submodules:
//! - `state` - The MapEditor struct definition and sub-structs
//! - `lifecycle` - Construction, preview/commit, undo/redo, hit testing
//! - `document_ops` - Icon, connector, layer and clipboard commands
//! - `persistence_handlers` - Export/import and session storage
//!
//! Pointer, wheel, keyboard and drop handling live in `crate::input`.

mod state;
mod lifecycle;
mod document_ops;
mod persistence_handlers;

pub use state::{MapEditor, Tool};

// Re-export sub-structs for use in other modules
pub use state::{CanvasState, DocumentState, ToolState, UiState};
