//! Export/import document format.
//!
//! ```json
//! {
//!   "version": 1,
//!   "icons": [...],
//!   "connectors": [...],
//!   "layers": [...],
//!   "currentLayerId": "default",
//!   "exportedAt": 1760000000
//! }
//! ```
//!
//! Import is all-or-nothing: the JSON is checked field by field before an
//! `EditorState` is built, and any failure is an `InvalidImportFormat`.

use super::unix_now;
use crate::constants::DOCUMENT_VERSION;
use crate::error::{EditorError, EditorResult};
use crate::types::{
    Connector, EditorState, IconId, Layer, LayerId, PlacedIcon, clamp_connector_width, clamp_icon_size,
    clamp_percent,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDocument {
    pub version: u32,
    pub icons: Vec<PlacedIcon>,
    pub connectors: Vec<Connector>,
    pub layers: Vec<Layer>,
    pub current_layer_id: LayerId,
    /// Unix seconds
    pub exported_at: u64,
}

fn invalid(reason: impl Into<String>) -> EditorError {
    EditorError::InvalidImportFormat(reason.into())
}

impl MapDocument {
    /// Snapshot `state` for export, stamped with the current time.
    pub fn from_state(state: &EditorState) -> Self {
        Self::from_state_at(state, unix_now())
    }

    pub fn from_state_at(state: &EditorState, exported_at: u64) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            icons: state.icons.clone(),
            connectors: state.connectors.clone(),
            layers: state.layers.clone(),
            current_layer_id: state.current_layer_id.clone(),
            exported_at,
        }
    }

    pub fn to_json(&self) -> EditorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate an exported document.
    ///
    /// `icons` must be present and an array. Missing `connectors` means none,
    /// missing or empty `layers` means the default layer, and a missing or
    /// dangling `currentLayerId` means the first layer. Positions, icon
    /// sizes and connector widths are clamped into range. Icons naming an
    /// unknown layer move to the first layer. Duplicate icon ids, connectors
    /// with a missing endpoint, and duplicate links are rejected.
    pub fn parse(json: &str) -> EditorResult<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| invalid(format!("not valid JSON: {e}")))?;
        let Value::Object(mut fields) = value else {
            return Err(invalid("document must be a JSON object"));
        };

        let icons = match fields.remove("icons") {
            Some(icons @ Value::Array(_)) => icons,
            Some(_) => return Err(invalid("`icons` must be an array")),
            None => return Err(invalid("missing `icons` array")),
        };
        let mut icons: Vec<PlacedIcon> =
            serde_json::from_value(icons).map_err(|e| invalid(format!("bad icon: {e}")))?;

        let mut connectors: Vec<Connector> = match fields.remove("connectors") {
            None | Some(Value::Null) => Vec::new(),
            Some(value @ Value::Array(_)) => {
                serde_json::from_value(value).map_err(|e| invalid(format!("bad connector: {e}")))?
            }
            Some(_) => return Err(invalid("`connectors` must be an array")),
        };

        let mut layers: Vec<Layer> = match fields.remove("layers") {
            None | Some(Value::Null) => Vec::new(),
            Some(value @ Value::Array(_)) => {
                serde_json::from_value(value).map_err(|e| invalid(format!("bad layer: {e}")))?
            }
            Some(_) => return Err(invalid("`layers` must be an array")),
        };
        if layers.is_empty() {
            layers.push(Layer::default_layer());
        }
        let mut layer_ids = HashSet::new();
        for layer in &layers {
            if !layer_ids.insert(&layer.id) {
                return Err(invalid(format!("duplicate layer id {}", layer.id)));
            }
        }
        let first_layer = layers[0].id.clone();

        let current_layer_id = fields
            .remove("currentLayerId")
            .and_then(|v| v.as_str().map(LayerId::from))
            .filter(|id| layer_ids.contains(id))
            .unwrap_or_else(|| first_layer.clone());

        let mut icon_ids: HashSet<IconId> = HashSet::new();
        for icon in &mut icons {
            if !icon_ids.insert(icon.id.clone()) {
                return Err(invalid(format!("duplicate icon id {}", icon.id)));
            }
            if !layer_ids.contains(&icon.layer_id) {
                debug!(icon = %icon.id, layer = %icon.layer_id, "Reassigning icon from unknown layer");
                icon.layer_id = first_layer.clone();
            }
            icon.position = clamp_percent(icon.position);
            icon.size = clamp_icon_size(icon.size);
        }

        for conn in &mut connectors {
            conn.width = clamp_connector_width(conn.width);
        }
        for (i, conn) in connectors.iter().enumerate() {
            for end in [&conn.start_icon_id, &conn.end_icon_id] {
                if !icon_ids.contains(end) {
                    return Err(invalid(format!("connector {} references missing icon {end}", conn.id)));
                }
            }
            if conn.start_icon_id == conn.end_icon_id {
                return Err(invalid(format!("connector {} links an icon to itself", conn.id)));
            }
            if connectors[..i]
                .iter()
                .any(|earlier| earlier.joins(&conn.start_icon_id, &conn.end_icon_id))
            {
                return Err(invalid(format!("duplicate link in connector {}", conn.id)));
            }
        }

        let version = fields
            .remove("version")
            .and_then(|v| v.as_u64())
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(DOCUMENT_VERSION);
        let exported_at = fields.remove("exportedAt").and_then(|v| v.as_u64()).unwrap_or(0);

        Ok(Self {
            version,
            icons,
            connectors,
            layers,
            current_layer_id,
            exported_at,
        })
    }

    pub fn into_state(self) -> EditorState {
        EditorState {
            icons: self.icons,
            connectors: self.connectors,
            layers: self.layers,
            current_layer_id: self.current_layer_id,
        }
    }
}
