//! History snapshots and input rings
//!
//! The host owns every history store; this extension only ever reads an
//! ordered snapshot of one. `Ring` is a small in-memory store hosts can use
//! to back shell/REPL-style input histories; it is not persisted and the
//! core never writes to it.

use serde::Deserialize;
use std::fmt;

/// Default capacity for a [`Ring`]
const DEFAULT_RING_CAPACITY: usize = 128;

/// Identifier naming a history ring in the host environment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct RingId(String);

impl RingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RingId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for RingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only snapshot of one history source, most recent entry first
///
/// Taken at the moment selection begins and discarded when the invocation
/// ends. An empty snapshot is the ordinary "no history available" state,
/// not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistorySnapshot {
    entries: Vec<String>,
}

impl HistorySnapshot {
    /// Wrap entries already ordered most-recent-first
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// The "no history available" snapshot
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in presentation order (most recent first)
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Consume the snapshot, yielding its entries in order
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

impl FromIterator<String> for HistorySnapshot {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// In-memory input ring, most recent entry first
///
/// Re-entering a value moves it to the front instead of duplicating it.
/// Capacity is enforced by dropping the oldest entries.
#[derive(Debug, Clone)]
pub struct Ring {
    entries: Vec<String>,
    capacity: usize,
}

impl Ring {
    /// Create an empty ring with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_RING_CAPACITY)
    }

    /// Create an empty ring holding at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record an input as the most recent entry
    ///
    /// Empty input is ignored. An input already present anywhere in the ring
    /// is moved to the front rather than stored twice.
    pub fn push(&mut self, input: impl Into<String>) {
        let input = input.into();
        if input.is_empty() {
            return;
        }

        if let Some(idx) = self.entries.iter().position(|e| *e == input) {
            let entry = self.entries.remove(idx);
            self.entries.insert(0, entry);
        } else {
            self.entries.insert(0, input);
        }

        self.entries.truncate(self.capacity);
    }

    /// Snapshot the current contents, most recent first
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot::new(self.entries.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Ring {
    fn default() -> Self {
        Self::new()
    }
}
