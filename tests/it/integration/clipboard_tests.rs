//! Copy/Paste Integration Tests

use crate::helpers::{TestStateBuilder, assert_close, assert_icon_count, editor_with_icons, position_of};
use kurbo::Point;
use mapboard::input::events::{Keystroke, PointerEvent};
use mapboard::notifications::ToastVariant;

#[test]
fn test_copy_three_and_paste_at_pointer() {
    let (mut editor, ids) = editor_with_icons(&[(10.0, 10.0), (20.0, 10.0), (30.0, 40.0)]);
    editor.canvas.selection.replace(ids.clone());

    assert!(editor.handle_key_down(&Keystroke::command("c")));
    assert_eq!(editor.ui.clipboard.len(), 3);
    assert_eq!(editor.toasts().latest().unwrap().message, "Copied 3 icon(s)");

    editor.handle_pointer_move(&PointerEvent::at(600.0, 600.0));
    assert!(editor.handle_key_down(&Keystroke::command("v")));

    assert_icon_count(&editor, 6);
    assert_eq!(editor.history().len(), 2);

    let pasted = editor.selection().ordered_ids(editor.state());
    assert_eq!(pasted.len(), 3);
    assert!(pasted.iter().all(|id| !ids.contains(id)));

    // Centroid (20,20) lands on the pointer, relative layout preserved
    let positions: Vec<Point> = pasted.iter().map(|id| position_of(&editor, id)).collect();
    assert_close(positions[0], Point::new(50.0, 50.0));
    assert_close(positions[1], Point::new(60.0, 50.0));
    assert_close(positions[2], Point::new(70.0, 80.0));
}

#[test]
fn test_paste_without_pointer_uses_canvas_centre() {
    let (mut editor, ids) = editor_with_icons(&[(10.0, 10.0), (30.0, 30.0)]);
    editor.canvas.selection.replace(ids.clone());
    editor.copy_selection();

    let pasted = editor.paste();

    assert_eq!(pasted.len(), 2);
    assert_close(position_of(&editor, &pasted[0]), Point::new(40.0, 40.0));
    assert_close(position_of(&editor, &pasted[1]), Point::new(60.0, 60.0));
    assert_eq!(editor.toasts().latest().unwrap().message, "Pasted 2 icon(s)");
}

#[test]
fn test_paste_with_empty_clipboard_only_warns() {
    let (mut editor, _) = editor_with_icons(&[(10.0, 10.0)]);

    assert!(editor.paste().is_empty());
    assert_icon_count(&editor, 1);
    assert_eq!(editor.history().len(), 1);
    let toast = editor.toasts().latest().unwrap();
    assert_eq!(toast.variant, ToastVariant::Warning);
    assert_eq!(toast.message, "Nothing to paste");
}

#[test]
fn test_copy_with_empty_selection_keeps_clipboard() {
    let (mut editor, ids) = editor_with_icons(&[(10.0, 10.0)]);
    editor.canvas.selection.select_only(ids[0].clone());
    assert_eq!(editor.copy_selection(), 1);

    editor.canvas.selection.clear();
    let toasts_before = editor.toasts().count();
    assert_eq!(editor.copy_selection(), 0);
    assert_eq!(editor.ui.clipboard.len(), 1);
    assert_eq!(editor.toasts().count(), toasts_before);
}

#[test]
fn test_clipboard_holds_values_not_references() {
    let (mut editor, ids) = editor_with_icons(&[(10.0, 10.0)]);
    editor.canvas.selection.select_only(ids[0].clone());
    editor.copy_selection();

    editor.delete_selected();
    assert_icon_count(&editor, 0);

    let pasted = editor.paste();
    assert_eq!(pasted.len(), 1);
    assert_eq!(editor.state().icon(&pasted[0]).unwrap().type_key, "seat");
}

#[test]
fn test_paste_twice_gives_distinct_ids() {
    let (mut editor, ids) = editor_with_icons(&[(10.0, 10.0)]);
    editor.canvas.selection.select_only(ids[0].clone());
    editor.copy_selection();

    let first = editor.paste();
    let second = editor.paste();

    assert_ne!(first, second);
    assert_icon_count(&editor, 3);
    assert_eq!(editor.history().len(), 3);
}

#[test]
fn test_paste_clamps_at_canvas_edge() {
    let (mut editor, ids) = editor_with_icons(&[(10.0, 50.0), (50.0, 50.0)]);
    editor.canvas.selection.replace(ids.clone());
    editor.copy_selection();

    editor.handle_pointer_move(&PointerEvent::at(990.0, 500.0));
    let pasted = editor.paste();

    assert_close(position_of(&editor, &pasted[0]), Point::new(79.0, 50.0));
    assert_close(position_of(&editor, &pasted[1]), Point::new(100.0, 50.0));
}

#[test]
fn test_paste_into_deleted_layer_falls_back_to_current() {
    let (mut editor, ids) = TestStateBuilder::new()
        .with_layer("Temporary")
        .with_icon("seat", (10.0, 10.0))
        .build();
    let temporary = editor.state().current_layer_id.clone();
    editor.canvas.selection.select_only(ids[0].clone());
    editor.copy_selection();

    assert!(editor.delete_layer(&temporary));
    let pasted = editor.paste();

    assert_eq!(
        editor.state().icon(&pasted[0]).unwrap().layer_id,
        editor.state().current_layer_id
    );
    assert_eq!(editor.toasts().latest().unwrap().variant, ToastVariant::Success);
}
