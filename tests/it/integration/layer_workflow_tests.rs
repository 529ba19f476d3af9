//! Layer Workflow Integration Tests

use crate::helpers::{TestStateBuilder, empty_editor, layer_of, position_of};
use kurbo::Point;
use mapboard::notifications::ToastVariant;
use mapboard::types::{IconPatch, LayerId};

#[test]
fn test_last_layer_cannot_be_deleted() {
    let mut editor = empty_editor();

    assert!(!editor.delete_layer(&LayerId::default_layer()));

    assert_eq!(editor.state().layers.len(), 1);
    assert_eq!(editor.history().len(), 1);
    let toast = editor.toasts().latest().unwrap();
    assert_eq!(toast.variant, ToastVariant::Error);
    assert_eq!(toast.message, "cannot delete the last remaining layer");
}

#[test]
fn test_new_layer_becomes_current_and_receives_placed_icons() {
    let mut editor = empty_editor();
    let stage = editor.add_layer("Stage area").unwrap();
    assert_eq!(editor.state().current_layer_id, stage);

    let id = editor.place_icon_by_key("stage").unwrap();

    assert_eq!(layer_of(&editor, &id), stage);
    assert_eq!(position_of(&editor, &id), Point::new(50.0, 50.0));
    let icon = editor.state().icon(&id).unwrap();
    assert_eq!(icon.label, "Stage");
    assert_eq!(icon.color, "#ef4444");
}

#[test]
fn test_unknown_palette_key_places_fallback_pin() {
    let mut editor = empty_editor();
    let id = editor.place_icon_by_key("helipad").unwrap();
    assert_eq!(editor.state().icon(&id).unwrap().type_key, "map-pin");
}

#[test]
fn test_deleting_layer_moves_icons_to_first_remaining_layer() {
    let (mut editor, ids) = TestStateBuilder::new()
        .with_layer("Upper")
        .with_icon("seat", (10.0, 10.0))
        .build();
    let upper = editor.state().current_layer_id.clone();

    assert!(editor.delete_layer(&upper));

    assert_eq!(layer_of(&editor, &ids[0]), LayerId::default_layer());
    assert_eq!(editor.state().current_layer_id, LayerId::default_layer());

    assert!(editor.undo());
    assert_eq!(layer_of(&editor, &ids[0]), upper);
}

#[test]
fn test_locked_icon_cannot_be_deleted() {
    let (mut editor, ids) = TestStateBuilder::new()
        .with_icon("stage", (10.0, 10.0))
        .build();
    editor.toggle_layer_lock(&LayerId::default_layer());
    let history_len = editor.history().len();

    assert!(!editor.delete_icon(&ids[0]));

    assert!(editor.state().has_icon(&ids[0]));
    assert_eq!(editor.history().len(), history_len);
    assert_eq!(editor.toasts().latest().unwrap().variant, ToastVariant::Error);

    editor.toggle_layer_lock(&LayerId::default_layer());
    assert!(editor.delete_icon(&ids[0]));
}

#[test]
fn test_rename_rejects_blank_and_trims() {
    let mut editor = empty_editor();
    let layer = LayerId::default_layer();

    assert!(!editor.rename_layer(&layer, "   "));
    assert_eq!(editor.state().layers[0].name, "Default");

    assert!(editor.rename_layer(&layer, "  Ground floor "));
    assert_eq!(editor.state().layers[0].name, "Ground floor");
}

#[test]
fn test_missing_layer_is_a_quiet_noop() {
    let mut editor = empty_editor();
    let ghost = LayerId::from("ghost");

    assert!(!editor.toggle_layer_visibility(&ghost));
    assert!(!editor.set_current_layer(&ghost));

    assert_eq!(editor.toasts().count(), 0);
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_reorder_and_color() {
    let mut editor = empty_editor();
    let a = editor.add_layer("A").unwrap();
    let b = editor.add_layer("B").unwrap();

    assert!(editor.reorder_layer(&b, 0));
    let order: Vec<&str> = editor.state().layers.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(order, vec!["B", "Default", "A"]);

    assert!(editor.reorder_layer(&b, 99));
    assert_eq!(editor.state().layers.last().unwrap().id, b);

    assert!(editor.set_layer_color(&a, Some("#22c55e".into())));
    assert_eq!(editor.state().layer(&a).unwrap().color.as_deref(), Some("#22c55e"));
}

#[test]
fn test_set_current_layer_changes_drop_target() {
    let mut editor = empty_editor();
    let upper = editor.add_layer("Upper").unwrap();
    assert!(editor.set_current_layer(&LayerId::default_layer()));

    let id = editor.place_icon_by_key("exit").unwrap();
    assert_eq!(layer_of(&editor, &id), LayerId::default_layer());
    assert_ne!(layer_of(&editor, &id), upper);
}

#[test]
fn test_locked_icon_cannot_be_moved_by_update() {
    let (mut editor, ids) = TestStateBuilder::new()
        .with_icon("stage", (10.0, 10.0))
        .with_layer("Open")
        .build();
    let open = editor.state().current_layer_id.clone();
    editor.toggle_layer_lock(&LayerId::default_layer());
    let history_len = editor.history().len();

    assert!(!editor.update_icon(&ids[0], IconPatch::new().position(Point::new(80.0, 80.0))));
    assert!(!editor.update_icon(&ids[0], IconPatch::new().layer(open)));

    assert_eq!(position_of(&editor, &ids[0]), Point::new(10.0, 10.0));
    assert_eq!(layer_of(&editor, &ids[0]), LayerId::default_layer());
    assert_eq!(editor.history().len(), history_len);
    assert_eq!(editor.toasts().latest().unwrap().variant, ToastVariant::Error);

    // Cosmetic edits stay allowed
    assert!(editor.update_icon(&ids[0], IconPatch::new().label("Main stage")));
    assert_eq!(editor.state().icon(&ids[0]).unwrap().label, "Main stage");
}
