//! Core types for the map editor.
//!
//! This module defines the document data structures: placed icons, the
//! connectors between them, layers, and the `EditorState` aggregate that the
//! history snapshots. Positions are stored in canvas-percentage space
//! (`[0, 100]` on each axis) so they survive canvas resizes.

use crate::constants::{
    DEFAULT_CONNECTOR_COLOR, DEFAULT_CONNECTOR_WIDTH, DEFAULT_ICON_COLOR, DEFAULT_ICON_SIZE,
    DEFAULT_LAYER_ID, DEFAULT_LAYER_NAME, MAX_CONNECTOR_WIDTH, MAX_ICON_SIZE, MIN_CONNECTOR_WIDTH,
    MIN_ICON_SIZE, PERCENT_MAX, PERCENT_MIN,
};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh, globally unique id
            pub fn generate() -> Self {
                Self(format!(concat!($prefix, "-{}"), Uuid::new_v4().simple()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

entity_id!(
    /// Stable identifier of a placed icon
    IconId,
    "icon"
);
entity_id!(
    /// Stable identifier of a connector
    ConnectorId,
    "connector"
);
entity_id!(
    /// Stable identifier of a layer
    LayerId,
    "layer"
);
entity_id!(
    /// Identifier of a document held in a session store
    DocumentId,
    "doc"
);

impl LayerId {
    /// The sentinel layer every fresh document starts with
    pub fn default_layer() -> Self {
        Self(DEFAULT_LAYER_ID.to_string())
    }
}

impl Default for LayerId {
    fn default() -> Self {
        Self::default_layer()
    }
}

// ============================================================================
// Clamping helpers
// ============================================================================

/// Clamp a point into canvas-percentage space.
#[inline]
pub fn clamp_percent(p: Point) -> Point {
    Point::new(
        p.x.clamp(PERCENT_MIN, PERCENT_MAX),
        p.y.clamp(PERCENT_MIN, PERCENT_MAX),
    )
}

/// Clamp an icon scale multiplier into its allowed range.
#[inline]
pub fn clamp_icon_size(size: f64) -> f64 {
    size.clamp(MIN_ICON_SIZE, MAX_ICON_SIZE)
}

/// Clamp a connector stroke width into its allowed range.
#[inline]
pub fn clamp_connector_width(width: u32) -> u32 {
    width.clamp(MIN_CONNECTOR_WIDTH, MAX_CONNECTOR_WIDTH)
}

fn default_icon_color() -> String {
    DEFAULT_ICON_COLOR.to_string()
}

fn default_icon_size() -> f64 {
    DEFAULT_ICON_SIZE
}

fn default_connector_color() -> String {
    DEFAULT_CONNECTOR_COLOR.to_string()
}

fn default_connector_width() -> u32 {
    DEFAULT_CONNECTOR_WIDTH
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Icons
// ============================================================================

/// An instance of an icon type positioned on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedIcon {
    pub id: IconId,
    /// Palette type key, also used to resolve the glyph
    pub type_key: String,
    pub label: String,
    /// Centre of the icon in canvas-percentage space
    pub position: Point,
    #[serde(default = "default_icon_color")]
    pub color: String,
    /// Degrees. Not normalized into [0, 360).
    #[serde(default)]
    pub rotation: f64,
    /// Scale multiplier in [0.5, 3.0]
    #[serde(default = "default_icon_size")]
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub layer_id: LayerId,
}

impl PlacedIcon {
    /// Create an icon with default rotation and size.
    pub fn new(
        id: IconId,
        type_key: impl Into<String>,
        label: impl Into<String>,
        position: Point,
        layer_id: LayerId,
    ) -> Self {
        Self {
            id,
            type_key: type_key.into(),
            label: label.into(),
            position: clamp_percent(position),
            color: default_icon_color(),
            rotation: 0.0,
            size: DEFAULT_ICON_SIZE,
            description: None,
            layer_id,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Partial update for a placed icon. Unset fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconPatch {
    pub type_key: Option<String>,
    pub label: Option<String>,
    pub position: Option<Point>,
    pub color: Option<String>,
    pub rotation: Option<f64>,
    pub size: Option<f64>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    pub layer_id: Option<LayerId>,
}

impl IconPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn layer(mut self, layer_id: LayerId) -> Self {
        self.layer_id = Some(layer_id);
        self
    }

    /// Merge this patch into an icon, clamping position and size.
    pub(crate) fn apply(self, icon: &mut PlacedIcon) {
        if let Some(type_key) = self.type_key {
            icon.type_key = type_key;
        }
        if let Some(label) = self.label {
            icon.label = label;
        }
        if let Some(position) = self.position {
            icon.position = clamp_percent(position);
        }
        if let Some(color) = self.color {
            icon.color = color;
        }
        if let Some(rotation) = self.rotation {
            icon.rotation = rotation;
        }
        if let Some(size) = self.size {
            icon.size = clamp_icon_size(size);
        }
        if let Some(description) = self.description {
            icon.description = description;
        }
        if let Some(layer_id) = self.layer_id {
            icon.layer_id = layer_id;
        }
    }
}

// ============================================================================
// Connectors
// ============================================================================

/// Stroke style of a connector line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl ConnectorStyle {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectorStyle::Solid => "Solid",
            ConnectorStyle::Dashed => "Dashed",
            ConnectorStyle::Dotted => "Dotted",
        }
    }

}

/// A link between exactly two placed icons.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub id: ConnectorId,
    pub start_icon_id: IconId,
    pub end_icon_id: IconId,
    #[serde(default = "default_connector_color")]
    pub color: String,
    /// Stroke width in pixels, [1, 10]
    #[serde(default = "default_connector_width")]
    pub width: u32,
    #[serde(default)]
    pub style: ConnectorStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Connector {
    pub fn new(id: ConnectorId, start_icon_id: IconId, end_icon_id: IconId) -> Self {
        Self {
            id,
            start_icon_id,
            end_icon_id,
            color: default_connector_color(),
            width: DEFAULT_CONNECTOR_WIDTH,
            style: ConnectorStyle::Solid,
            label: None,
            description: None,
        }
    }

    /// Returns true if this connector joins `a` and `b`, in either direction
    pub fn joins(&self, a: &IconId, b: &IconId) -> bool {
        (&self.start_icon_id == a && &self.end_icon_id == b)
            || (&self.start_icon_id == b && &self.end_icon_id == a)
    }
}

/// Partial update for a connector. Unset fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectorPatch {
    pub color: Option<String>,
    pub width: Option<u32>,
    pub style: Option<ConnectorStyle>,
    pub label: Option<Option<String>>,
    pub description: Option<Option<String>>,
}

impl ConnectorPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn style(mut self, style: ConnectorStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn label(mut self, label: Option<String>) -> Self {
        self.label = Some(label);
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub(crate) fn apply(self, connector: &mut Connector) {
        if let Some(color) = self.color {
            connector.color = color;
        }
        if let Some(width) = self.width {
            connector.width = clamp_connector_width(width);
        }
        if let Some(style) = self.style {
            connector.style = style;
        }
        if let Some(label) = self.label {
            connector.label = label;
        }
        if let Some(description) = self.description {
            connector.description = description;
        }
    }
}

// ============================================================================
// Layers
// ============================================================================

/// A named, orderable visibility/lock group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Icons on a locked layer cannot be moved or deleted interactively
    #[serde(default)]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Layer {
    pub fn new(id: LayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            visible: true,
            locked: false,
            color: None,
        }
    }

    /// The layer every fresh document starts with
    pub fn default_layer() -> Self {
        Self::new(LayerId::default_layer(), DEFAULT_LAYER_NAME)
    }
}

// ============================================================================
// Palette
// ============================================================================

/// A palette entry. Serialized as the drag payload when an icon type is
/// dragged from the palette onto the canvas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconType {
    #[serde(rename = "type")]
    pub type_key: String,
    pub label: String,
    /// Glyph name
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl IconType {
    pub fn new(
        type_key: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            type_key: type_key.into(),
            label: label.into(),
            icon: icon.into(),
            color: Some(color.into()),
        }
    }
}

// ============================================================================
// Editor State
// ============================================================================

/// The document aggregate. This is the unit the history snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub icons: Vec<PlacedIcon>,
    pub connectors: Vec<Connector>,
    /// Display order; index 0 renders at the bottom
    pub layers: Vec<Layer>,
    pub current_layer_id: LayerId,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// An empty document with only the default layer.
    pub fn new() -> Self {
        Self {
            icons: Vec::new(),
            connectors: Vec::new(),
            layers: vec![Layer::default_layer()],
            current_layer_id: LayerId::default_layer(),
        }
    }

    pub fn icon(&self, id: &IconId) -> Option<&PlacedIcon> {
        self.icons.iter().find(|icon| &icon.id == id)
    }

    pub fn connector(&self, id: &ConnectorId) -> Option<&Connector> {
        self.connectors.iter().find(|conn| &conn.id == id)
    }

    pub fn layer(&self, id: &LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| &layer.id == id)
    }

    pub fn has_icon(&self, id: &IconId) -> bool {
        self.icon(id).is_some()
    }

    pub fn has_layer(&self, id: &LayerId) -> bool {
        self.layer(id).is_some()
    }

    /// Index of a layer in display order
    pub fn layer_index(&self, id: &LayerId) -> Option<usize> {
        self.layers.iter().position(|layer| &layer.id == id)
    }

    /// Returns true if a connector joins `a` and `b` in either direction
    pub fn link_exists(&self, a: &IconId, b: &IconId) -> bool {
        self.connectors.iter().any(|conn| conn.joins(a, b))
    }

    /// An icon can be moved or deleted if its layer is not locked.
    pub fn is_icon_editable(&self, id: &IconId) -> bool {
        self.icon(id)
            .map(|icon| !self.layer(&icon.layer_id).is_some_and(|layer| layer.locked))
            .unwrap_or(false)
    }

    /// An icon can be hit or marquee-selected if its layer is visible.
    pub fn is_icon_visible(&self, id: &IconId) -> bool {
        self.icon(id)
            .map(|icon| self.layer(&icon.layer_id).is_none_or(|layer| layer.visible))
            .unwrap_or(false)
    }

    /// Icons in render order: by layer display order, then insertion order.
    pub fn icons_in_render_order(&self) -> Vec<&PlacedIcon> {
        let mut ordered: Vec<&PlacedIcon> = self.icons.iter().collect();
        ordered.sort_by_key(|icon| self.layer_index(&icon.layer_id).unwrap_or(0));
        ordered
    }

    /// Endpoint positions of a connector, if both icons exist.
    pub fn connector_endpoints(&self, connector: &Connector) -> Option<(Point, Point)> {
        let start = self.icon(&connector.start_icon_id)?;
        let end = self.icon(&connector.end_icon_id)?;
        Some((start.position, end.position))
    }

    /// Case-insensitive search over icon labels, type keys and descriptions.
    pub fn find_icons(&self, query: &str) -> Vec<&PlacedIcon> {
        let query = query.to_lowercase();
        self.icons
            .iter()
            .filter(|icon| {
                icon.label.to_lowercase().contains(&query)
                    || icon.type_key.to_lowercase().contains(&query)
                    || icon
                        .description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&query))
            })
            .collect()
    }
}
