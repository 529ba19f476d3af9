//! Error types for editor operations
//!
//! Every expected domain condition (missing ids, duplicate links, the last
//! layer, malformed imports) is a variant here. Operations return these
//! instead of panicking, and a rejected operation never leaves the document
//! partially mutated.

use std::fmt;
use thiserror::Error;

/// The kind of entity an id refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Icon,
    Connector,
    Layer,
    Document,
    Session,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Icon => "icon",
            EntityKind::Connector => "connector",
            EntityKind::Layer => "layer",
            EntityKind::Document => "document",
            EntityKind::Session => "session",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during editor operations
#[derive(Error, Debug)]
pub enum EditorError {
    /// An operation referenced an id that does not exist
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// A connector already joins this pair of icons (in either direction)
    #[error("a connector already exists between {start} and {end}")]
    DuplicateLink { start: String, end: String },

    /// A connector cannot start and end on the same icon
    #[error("cannot connect icon {0} to itself")]
    SelfLink(String),

    /// A connector endpoint does not exist
    #[error("connector endpoint not found: {0}")]
    MissingEndpoint(String),

    /// The only remaining layer cannot be deleted
    #[error("cannot delete the last remaining layer")]
    LastLayer,

    /// The icon sits on a locked layer
    #[error("icon {0} is on a locked layer")]
    LockedLayer(String),

    /// Layer names must contain something other than whitespace
    #[error("name must not be empty")]
    EmptyName,

    /// Imported document failed validation
    #[error("invalid import format: {0}")]
    InvalidImportFormat(String),

    /// Palette drop payload could not be decoded
    #[error("invalid drop payload: {0}")]
    InvalidDropPayload(String),

    /// JSON encoding error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EditorError {
    pub fn icon_not_found(id: impl Into<String>) -> Self {
        EditorError::NotFound {
            kind: EntityKind::Icon,
            id: id.into(),
        }
    }

    pub fn connector_not_found(id: impl Into<String>) -> Self {
        EditorError::NotFound {
            kind: EntityKind::Connector,
            id: id.into(),
        }
    }

    pub fn layer_not_found(id: impl Into<String>) -> Self {
        EditorError::NotFound {
            kind: EntityKind::Layer,
            id: id.into(),
        }
    }

    /// Returns true for `NotFound` errors, which callers treat as a no-op
    pub fn is_not_found(&self) -> bool {
        matches!(self, EditorError::NotFound { .. })
    }
}

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
