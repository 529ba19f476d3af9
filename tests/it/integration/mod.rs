//! Integration tests for mapboard.
//!
//! These tests verify the interaction between multiple components
//! and test complete workflows end-to-end through `MapEditor`.

mod clipboard_tests;
mod layer_workflow_tests;
mod persistence_tests;
mod undo_redo_tests;
