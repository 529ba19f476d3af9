//! Connect mode - the two-click protocol for drawing connectors.
//!
//! ```text
//! Disconnected --toggle--> AwaitingFirstEndpoint --click A--> AwaitingSecondEndpoint(A)
//! AwaitingSecondEndpoint(A) --click A--> AwaitingFirstEndpoint
//! AwaitingSecondEndpoint(A) --click B--> Disconnected   (link created, or rejected as duplicate)
//! any --toggle/escape--> Disconnected
//! ```

use crate::error::{EditorError, EditorResult};
use crate::types::{ConnectorId, EditorState, IconId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectState {
    #[default]
    Disconnected,
    AwaitingFirstEndpoint,
    AwaitingSecondEndpoint(IconId),
}

/// What a click on an icon did while connect mode was active.
#[derive(Debug)]
pub enum ConnectOutcome {
    /// Connect mode is off; the click is not for us
    Inactive,
    /// The clicked icon is now the pending start
    Started(IconId),
    /// The pending start was clicked again and released
    Cancelled,
    /// A connector was created; the caller commits `state`
    Created {
        state: EditorState,
        connector_id: ConnectorId,
    },
}

impl ConnectState {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Disconnected)
    }

    pub fn pending_start(&self) -> Option<&IconId> {
        match self {
            Self::AwaitingSecondEndpoint(id) => Some(id),
            _ => None,
        }
    }

    /// Flip connect mode. Turning it off discards any pending start.
    pub fn toggle(&mut self) {
        *self = if self.is_active() {
            Self::Disconnected
        } else {
            Self::AwaitingFirstEndpoint
        };
    }

    pub fn exit(&mut self) {
        *self = Self::Disconnected;
    }

    /// Feed a click on `icon`.
    ///
    /// Any error from creating the connector (a duplicate pair, a vanished
    /// endpoint) exits connect mode and leaves the document untouched.
    pub fn click_icon(&mut self, icon: &IconId, doc: &EditorState) -> EditorResult<ConnectOutcome> {
        match std::mem::take(self) {
            Self::Disconnected => Ok(ConnectOutcome::Inactive),
            Self::AwaitingFirstEndpoint => {
                if !doc.has_icon(icon) {
                    *self = Self::AwaitingFirstEndpoint;
                    return Err(EditorError::icon_not_found(icon.as_str()));
                }
                *self = Self::AwaitingSecondEndpoint(icon.clone());
                Ok(ConnectOutcome::Started(icon.clone()))
            }
            Self::AwaitingSecondEndpoint(start) if &start == icon => {
                *self = Self::AwaitingFirstEndpoint;
                Ok(ConnectOutcome::Cancelled)
            }
            Self::AwaitingSecondEndpoint(start) => {
                // Self is already Disconnected from the take above
                let (state, connector_id) = doc.add_connector(&start, icon)?;
                Ok(ConnectOutcome::Created {
                    state,
                    connector_id,
                })
            }
        }
    }
}
