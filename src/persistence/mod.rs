//! Persistence boundary.
//!
//! - `document` - the versioned JSON export/import format, with validation
//! - `session_store` - in-memory, TTL-evicted document storage keyed by session

mod document;
mod session_store;

pub use document::MapDocument;
pub use session_store::{SessionStore, StoreStats, StoredDocument};

use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch, 0 if the clock is before it.
pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
