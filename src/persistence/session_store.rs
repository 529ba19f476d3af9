//! In-memory document storage scoped to a session, with idle expiry.
//!
//! The store is an ordinary value: construct one, wrap it in an `Arc` and
//! hand it to whoever needs it. Every operation on a session refreshes its
//! idle timer; a session untouched for longer than the TTL is treated as
//! gone and is dropped by `evict_expired`.

use super::unix_now;
use crate::error::{EditorError, EditorResult, EntityKind};
use crate::types::{DocumentId, EditorState};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// A named document held by a session.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub name: String,
    pub state: EditorState,
    /// Unix seconds
    pub created_at: u64,
    /// Unix seconds
    pub updated_at: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub sessions: usize,
    pub documents: usize,
}

#[derive(Debug)]
struct Session {
    /// Creation order
    documents: Vec<StoredDocument>,
    last_access: Instant,
}

impl Session {
    fn new(now: Instant) -> Self {
        Self {
            documents: Vec::new(),
            last_access: now,
        }
    }

    fn document_mut(&mut self, id: &DocumentId) -> Option<&mut StoredDocument> {
        self.documents.iter_mut().find(|doc| &doc.id == id)
    }
}

fn document_not_found(id: &DocumentId) -> EditorError {
    EditorError::NotFound {
        kind: EntityKind::Document,
        id: id.to_string(),
    }
}

pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Run `f` against a live session, creating it (or replacing an expired
    /// one) first, and refresh its idle timer.
    fn with_session<T>(&self, session_id: &str, f: impl FnOnce(&mut Session) -> T) -> T {
        let now = Instant::now();
        let mut sessions = self.sessions.write();
        let expired = sessions
            .get(session_id)
            .is_some_and(|session| now.saturating_duration_since(session.last_access) > self.ttl);
        if expired {
            debug!(session_id, "Session expired, starting fresh");
            sessions.remove(session_id);
        }
        let session = sessions.entry(session_id.to_string()).or_insert_with(|| {
            info!(session_id, "Created session");
            Session::new(now)
        });
        session.last_access = now;
        f(session)
    }

    /// Store a new document and return its id.
    pub fn create_document(&self, session_id: &str, name: impl Into<String>, state: EditorState) -> DocumentId {
        let name = name.into();
        let id = DocumentId::generate();
        let now = unix_now();
        self.with_session(session_id, |session| {
            session.documents.push(StoredDocument {
                id: id.clone(),
                name,
                state,
                created_at: now,
                updated_at: now,
            });
        });
        info!(session_id, document = %id, "Created document");
        id
    }

    pub fn get_document(&self, session_id: &str, id: &DocumentId) -> Option<StoredDocument> {
        self.with_session(session_id, |session| {
            session.documents.iter().find(|doc| &doc.id == id).cloned()
        })
    }

    /// Every document in the session, in creation order.
    pub fn list_documents(&self, session_id: &str) -> Vec<StoredDocument> {
        self.with_session(session_id, |session| session.documents.clone())
    }

    /// Replace a document's contents.
    pub fn update_document(
        &self,
        session_id: &str,
        id: &DocumentId,
        state: EditorState,
    ) -> EditorResult<StoredDocument> {
        self.with_session(session_id, |session| {
            let doc = session.document_mut(id).ok_or_else(|| document_not_found(id))?;
            doc.state = state;
            doc.updated_at = unix_now();
            debug!(session_id, document = %id, "Updated document");
            Ok(doc.clone())
        })
    }

    pub fn rename_document(&self, session_id: &str, id: &DocumentId, name: &str) -> EditorResult<StoredDocument> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EditorError::EmptyName);
        }
        self.with_session(session_id, |session| {
            let doc = session.document_mut(id).ok_or_else(|| document_not_found(id))?;
            doc.name = name.to_string();
            doc.updated_at = unix_now();
            Ok(doc.clone())
        })
    }

    /// Returns true if the document existed.
    pub fn delete_document(&self, session_id: &str, id: &DocumentId) -> bool {
        let deleted = self.with_session(session_id, |session| {
            let before = session.documents.len();
            session.documents.retain(|doc| &doc.id != id);
            session.documents.len() != before
        });
        if deleted {
            info!(session_id, document = %id, "Deleted document");
        }
        deleted
    }

    /// Drop every session idle for longer than the TTL. Returns how many
    /// were dropped.
    pub fn evict_expired(&self) -> usize {
        self.evict_expired_at(Instant::now())
    }

    pub fn evict_expired_at(&self, now: Instant) -> usize {
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, session| now.saturating_duration_since(session.last_access) <= self.ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, "Evicted expired sessions");
        }
        evicted
    }

    /// Drop a session and everything in it.
    pub fn clear_session(&self, session_id: &str) -> bool {
        self.sessions.write().remove(session_id).is_some()
    }

    pub fn stats(&self) -> StoreStats {
        let sessions = self.sessions.read();
        StoreStats {
            sessions: sessions.len(),
            documents: sessions.values().map(|s| s.documents.len()).sum(),
        }
    }
}
