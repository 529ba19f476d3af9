//! Undo/redo history over whole-state snapshots.
//!
//! ## Live preview vs. commit
//!
//! Continuous interactions (dragging, resizing, panning) update the displayed
//! document without touching the history. Only the terminal event of the
//! interaction commits, once, with the final state. A commit equal to the
//! entry under the cursor is skipped, so no-op edits never become undo steps.
//!
//! ```text
//! entries: [s0, s1, s2, s3]      commit(s4) after two undos:
//!                   ^ cursor     [s0, s1, s4]
//!                                         ^ cursor   (s2, s3 discarded)
//! ```

use crate::constants::MAX_HISTORY_STATES;
use std::collections::VecDeque;

/// Linear undo/redo stack. Invariant: `cursor < entries.len()`, and the
/// stack is never empty.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    cursor: usize,
    max_entries: usize,
}

impl<T: Clone + PartialEq> History<T> {
    /// Create a history whose only entry is `initial`.
    pub fn new(initial: T) -> Self {
        Self::with_limit(initial, MAX_HISTORY_STATES)
    }

    /// Create a history that keeps at most `max_entries` snapshots.
    pub fn with_limit(initial: T, max_entries: usize) -> Self {
        let mut entries = VecDeque::with_capacity(max_entries.min(64));
        entries.push_back(initial);
        Self {
            entries,
            cursor: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// Record `state` as a new undo step.
    ///
    /// Discards any redo entries beyond the cursor, appends, and evicts the
    /// oldest entry once the limit is exceeded. Returns false (and records
    /// nothing) when `state` equals the current entry.
    pub fn commit(&mut self, state: T) -> bool {
        if self.current() == &state {
            return false;
        }

        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(state);
        self.cursor += 1;

        if self.entries.len() > self.max_entries {
            self.entries.pop_front();
            self.cursor -= 1;
        }
        true
    }

    /// Step back one entry. At the oldest entry this is a no-op that returns
    /// the current entry.
    pub fn undo(&mut self) -> &T {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Step forward one entry. At the newest entry this is a no-op that
    /// returns the current entry.
    pub fn redo(&mut self) -> &T {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// The entry under the cursor
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least its initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Drop every entry and start over from `state`.
    pub fn reset(&mut self, state: T) {
        self.entries.clear();
        self.entries.push_back(state);
        self.cursor = 0;
    }
}
