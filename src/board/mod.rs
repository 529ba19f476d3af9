//! Entity model - pure update operations over `EditorState`.
//!
//! Every operation borrows the current state and returns a new one, leaving
//! its input untouched. That copy-on-write discipline is what lets the
//! history keep whole-state snapshots without any of them aliasing the
//! document being edited.
//!
//! ## Modules
//!
//! - `icons` - add/update/move/rotate/resize/duplicate/delete placed icons
//! - `connectors` - link icons, edit and delete connectors
//! - `layers` - add/rename/toggle/reorder/delete layers

mod connectors;
mod icons;
mod layers;
