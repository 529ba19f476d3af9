//! Export/Import and Session Store Integration Tests

use crate::helpers::{TestStateBuilder, assert_icon_count, editor_with_icons, empty_editor};
use mapboard::error::EditorError;
use mapboard::persistence::{MapDocument, SessionStore, StoreStats};
use mapboard::types::DocumentId;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn store() -> SessionStore {
    SessionStore::new(Duration::from_secs(60))
}

#[test]
fn test_export_then_import_reproduces_document() {
    let (mut source, ids) = TestStateBuilder::new()
        .with_icons(&[(10.0, 20.0), (30.0, 40.0), (70.0, 80.0)])
        .with_connector(0, 1)
        .with_connector(1, 2)
        .with_layer("Upper")
        .build();
    source.rotate_icon(&ids[0], 45.0);
    let json = source.export_json().unwrap();

    let mut target = empty_editor();
    target.import_json(&json).unwrap();

    assert_eq!(target.state(), source.state());
    let doc = MapDocument::parse(&json).unwrap();
    assert_eq!(doc.version, 1);
    assert!(doc.exported_at > 0);
}

#[test]
fn test_import_without_icons_is_rejected_and_state_unchanged() {
    let (mut editor, _) = editor_with_icons(&[(10.0, 10.0), (20.0, 20.0)]);
    let before = editor.state().clone();

    let err = editor
        .import_json(r#"{"connectors": [], "layers": []}"#)
        .unwrap_err();

    assert!(matches!(err, EditorError::InvalidImportFormat(_)));
    assert_eq!(editor.state(), &before);
    assert_eq!(editor.history().len(), 1);
    assert!(editor.toasts().latest().unwrap().message.contains("icons"));
}

#[test]
fn test_import_with_non_array_icons_is_rejected() {
    let mut editor = empty_editor();
    assert!(editor.import_json(r#"{"icons": "lots"}"#).is_err());
    assert!(editor.import_json("[]").is_err());
    assert!(editor.import_json("{").is_err());
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_import_is_undoable_and_clears_selection() {
    let (mut editor, ids) = editor_with_icons(&[(10.0, 10.0)]);
    editor.canvas.selection.select_only(ids[0].clone());

    editor.import_json(r#"{"icons": []}"#).unwrap();
    assert_icon_count(&editor, 0);
    assert!(editor.selection().is_empty());

    assert!(editor.undo());
    assert_icon_count(&editor, 1);
}

#[test]
fn test_save_and_reopen_from_store() {
    let store = store();
    let (mut editor, _) = editor_with_icons(&[(10.0, 10.0), (20.0, 20.0)]);

    let id = editor.save_to_store(&store, "session-a", "Main hall", None).unwrap();
    let saved = editor.state().clone();

    let mut other = empty_editor();
    other.place_icon_by_key("stage");
    other.open_from_store(&store, "session-a", &id).unwrap();

    assert_eq!(other.state(), &saved);
    assert!(!other.can_undo());
    assert_eq!(store.list_documents("session-a")[0].name, "Main hall");
}

#[test]
fn test_save_over_existing_document() {
    let store = store();
    let mut editor = empty_editor();
    let id = editor.save_to_store(&store, "s", "Plan", None).unwrap();

    editor.place_icon_by_key("exit");
    let again = editor.save_to_store(&store, "s", "ignored", Some(&id)).unwrap();

    assert_eq!(again, id);
    assert_eq!(store.list_documents("s").len(), 1);
    assert_eq!(store.get_document("s", &id).unwrap().state.icons.len(), 1);
}

#[test]
fn test_open_missing_document_fails() {
    let store = store();
    let mut editor = empty_editor();

    let err = editor
        .open_from_store(&store, "s", &DocumentId::from("nope"))
        .unwrap_err();

    assert!(err.is_not_found());
    let err = editor
        .save_to_store(&store, "s", "x", Some(&DocumentId::from("nope")))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_store_is_shareable_across_threads() {
    let store = Arc::new(store());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut editor = empty_editor();
                editor.place_icon_by_key("seating");
                let session = format!("session-{i}");
                editor.save_to_store(&store, &session, "Plan", None).unwrap();
                editor.save_to_store(&store, &session, "Backup", None).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.stats(), StoreStats { sessions: 4, documents: 8 });
}

#[test]
fn test_rename_and_delete_stored_document() {
    let store = store();
    let mut editor = empty_editor();
    let id = editor.save_to_store(&store, "s", "Draft", None).unwrap();

    assert!(matches!(store.rename_document("s", &id, " "), Err(EditorError::EmptyName)));
    assert_eq!(store.rename_document("s", &id, "Final").unwrap().name, "Final");

    assert!(store.delete_document("s", &id));
    assert!(store.list_documents("s").is_empty());
    assert!(store.clear_session("s"));
    assert_eq!(store.stats(), StoreStats::default());
}
