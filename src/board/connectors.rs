//! Connector operations.

use crate::error::{EditorError, EditorResult};
use crate::types::{Connector, ConnectorId, ConnectorPatch, EditorState, IconId};

impl EditorState {
    /// Link two icons with a default-styled connector.
    ///
    /// Rejected when both ends are the same icon, when either end is missing,
    /// or when the unordered pair is already linked.
    pub fn add_connector(
        &self,
        start: &IconId,
        end: &IconId,
    ) -> EditorResult<(EditorState, ConnectorId)> {
        if start == end {
            return Err(EditorError::SelfLink(start.to_string()));
        }
        for endpoint in [start, end] {
            if !self.has_icon(endpoint) {
                return Err(EditorError::MissingEndpoint(endpoint.to_string()));
            }
        }
        if self.link_exists(start, end) {
            return Err(EditorError::DuplicateLink {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let id = ConnectorId::generate();
        let mut next = self.clone();
        next.connectors
            .push(Connector::new(id.clone(), start.clone(), end.clone()));
        Ok((next, id))
    }

    /// Merge a partial update into one connector. Width is clamped to `[1, 10]`.
    pub fn update_connector(
        &self,
        id: &ConnectorId,
        patch: ConnectorPatch,
    ) -> EditorResult<EditorState> {
        let mut next = self.clone();
        let connector = next
            .connectors
            .iter_mut()
            .find(|conn| &conn.id == id)
            .ok_or_else(|| EditorError::connector_not_found(id.as_str()))?;
        patch.apply(connector);
        Ok(next)
    }

    pub fn delete_connector(&self, id: &ConnectorId) -> EditorResult<EditorState> {
        if self.connector(id).is_none() {
            return Err(EditorError::connector_not_found(id.as_str()));
        }
        let mut next = self.clone();
        next.connectors.retain(|conn| &conn.id != id);
        Ok(next)
    }
}
