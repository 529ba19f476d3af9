//! Undo/Redo Integration Tests

use crate::helpers::{TestStateBuilder, assert_icon_count, editor_with_icons, empty_editor, screen_of};
use mapboard::input::events::PointerEvent;
use mapboard::settings::EditorSettings;
use mapboard::types::IconPatch;

#[test]
fn test_undo_redo_add_sequence() {
    let mut editor = empty_editor();
    editor.place_icon_by_key("stage");
    editor.place_icon_by_key("exit");
    editor.place_icon_by_key("wifi");
    assert_icon_count(&editor, 3);

    assert!(editor.undo());
    assert_icon_count(&editor, 2);
    assert!(editor.undo());
    assert!(editor.undo());
    assert_icon_count(&editor, 0);
    assert!(!editor.undo());

    assert!(editor.redo());
    assert!(editor.redo());
    assert_icon_count(&editor, 2);
}

#[test]
fn test_commit_after_undo_discards_redo() {
    let mut editor = empty_editor();
    let a = editor.place_icon_by_key("stage").unwrap();
    let b = editor.place_icon_by_key("exit").unwrap();

    editor.undo();
    assert!(editor.can_redo());

    let c = editor.place_icon_by_key("wifi").unwrap();
    assert!(!editor.can_redo());
    assert!(!editor.redo());

    assert!(editor.state().has_icon(&a));
    assert!(!editor.state().has_icon(&b));
    assert!(editor.state().has_icon(&c));
    assert_eq!(editor.history().len(), 3);
}

#[test]
fn test_noop_edit_is_not_recorded() {
    let (mut editor, ids) = editor_with_icons(&[(10.0, 10.0)]);

    assert!(editor.update_icon(&ids[0], IconPatch::new().label("seat")));
    assert_eq!(editor.history().len(), 1);

    assert!(editor.update_icon(&ids[0], IconPatch::new().label("Row A")));
    assert_eq!(editor.history().len(), 2);
}

#[test]
fn test_history_limit_evicts_oldest() {
    let settings = EditorSettings {
        max_history: 3,
        ..EditorSettings::default()
    };
    let (mut editor, ids) = TestStateBuilder::new()
        .with_icon("stage", (10.0, 10.0))
        .with_settings(settings)
        .build();

    for _ in 0..5 {
        editor.rotate_icon(&ids[0], 45.0);
    }

    assert_eq!(editor.history().len(), 3);
    while editor.undo() {}
    assert_eq!(editor.state().icon(&ids[0]).unwrap().rotation, 135.0);
}

#[test]
fn test_undo_prunes_selection_of_removed_icons() {
    let mut editor = empty_editor();
    let id = editor.place_icon_by_key("stage").unwrap();
    editor.canvas.selection.select_only(id);

    editor.undo();

    assert!(editor.selection().is_empty());
}

#[test]
fn test_undo_mid_drag_abandons_the_drag() {
    let (mut editor, ids) = editor_with_icons(&[(10.0, 10.0)]);
    editor.rotate_icon(&ids[0], 45.0);

    let from = screen_of(&editor, &ids[0]);
    editor.handle_pointer_down(&PointerEvent::new(from));
    editor.handle_pointer_move(&PointerEvent::at(600.0, 600.0));

    assert!(editor.undo());
    assert!(editor.input_state().is_idle());
    assert_eq!(editor.state().icon(&ids[0]).unwrap().rotation, 0.0);
    assert_eq!(editor.state().icon(&ids[0]).unwrap().position, kurbo::Point::new(10.0, 10.0));
}

#[test]
fn test_rotation_is_unbounded() {
    let (mut editor, ids) = editor_with_icons(&[(10.0, 10.0)]);
    for _ in 0..8 {
        editor.rotate_icon(&ids[0], 45.0);
    }
    // 360 is distinct from 0, so every step is its own undo entry
    assert_eq!(editor.state().icon(&ids[0]).unwrap().rotation, 360.0);
    assert_eq!(editor.history().len(), 9);
}

#[test]
fn test_resize_is_clamped_and_saturates() {
    let (mut editor, ids) = editor_with_icons(&[(10.0, 10.0)]);
    for _ in 0..20 {
        editor.resize_icon(&ids[0], 0.25);
    }
    assert_eq!(editor.state().icon(&ids[0]).unwrap().size, 3.0);
    // 1.0 -> 3.0 in 0.25 steps is 8 entries; the rest are no-ops
    assert_eq!(editor.history().len(), 9);
}

#[test]
fn test_duplicate_selects_copy_and_caps_offset() {
    let (mut editor, ids) = editor_with_icons(&[(93.0, 20.0)]);

    let copy = editor.duplicate_icon(&ids[0]).unwrap();

    assert!(editor.selection().contains(&copy));
    assert_eq!(editor.selection().len(), 1);
    let position = editor.state().icon(&copy).unwrap().position;
    assert_eq!(position, kurbo::Point::new(95.0, 25.0));
}

#[test]
fn test_duplicate_uses_configured_offset() {
    let settings = EditorSettings {
        duplicate_offset: 12.0,
        ..EditorSettings::default()
    };
    let (mut editor, ids) = TestStateBuilder::new()
        .with_icons(&[(30.0, 40.0)])
        .with_settings(settings)
        .build();

    let copy = editor.duplicate_icon(&ids[0]).unwrap();

    let position = editor.state().icon(&copy).unwrap().position;
    assert_eq!(position, kurbo::Point::new(42.0, 52.0));
    assert_eq!(editor.history().len(), 2);
}
