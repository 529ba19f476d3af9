//! Export/import and session storage for the open document.

use super::MapEditor;
use crate::error::{EditorError, EditorResult, EntityKind};
use crate::notifications::Toast;
use crate::persistence::{MapDocument, SessionStore};
use crate::types::DocumentId;
use tracing::{info, warn};

impl MapEditor {
    /// Serialize the displayed document as pretty JSON.
    pub fn export_json(&self) -> EditorResult<String> {
        let json = MapDocument::from_state(self.state()).to_json()?;
        info!(
            icons = self.state().icons.len(),
            connectors = self.state().connectors.len(),
            "Exported document"
        );
        Ok(json)
    }

    /// Replace the document with an imported one. The import is committed,
    /// so it can be undone. A rejected file leaves everything untouched.
    pub fn import_json(&mut self, json: &str) -> EditorResult<()> {
        let document = match MapDocument::parse(json) {
            Ok(document) => document,
            Err(e) => {
                warn!(error = %e, "Import rejected");
                self.ui.toasts.push(Toast::error(e.to_string()));
                return Err(e);
            }
        };

        let state = document.into_state();
        let icons = state.icons.len();
        self.tools.connect.exit();
        self.canvas.selection.clear();
        self.commit(state);
        self.canvas.input_state.reset();
        info!(icons, "Imported document");
        self.ui.toasts.push(Toast::success(format!("Imported {icons} icon(s)")));
        Ok(())
    }

    /// Save the displayed document into `store`. With `existing`, that
    /// document is overwritten; otherwise a new one named `name` is created.
    pub fn save_to_store(
        &mut self,
        store: &SessionStore,
        session_id: &str,
        name: &str,
        existing: Option<&DocumentId>,
    ) -> EditorResult<DocumentId> {
        let state = self.state().clone();
        let result = match existing {
            Some(id) => store.update_document(session_id, id, state).map(|doc| doc.id),
            None => Ok(store.create_document(session_id, name, state)),
        };
        match &result {
            Ok(_) => self.ui.toasts.push(Toast::success("Map saved")),
            Err(e) => {
                warn!(error = %e, "Save failed");
                self.ui.toasts.push(Toast::error(format!("Failed to save: {e}")));
            }
        }
        result
    }

    /// Open a stored document. History restarts from it.
    pub fn open_from_store(&mut self, store: &SessionStore, session_id: &str, id: &DocumentId) -> EditorResult<()> {
        let Some(doc) = store.get_document(session_id, id) else {
            let err = EditorError::NotFound {
                kind: EntityKind::Document,
                id: id.to_string(),
            };
            self.ui.toasts.push(Toast::error(err.to_string()));
            return Err(err);
        };
        info!(document = %doc.id, name = %doc.name, "Opened document");
        self.load_state(doc.state);
        Ok(())
    }
}
