//! Candidate sources for the host completion prompt
//!
//! Generic completion facilities like to reorder what they are given,
//! alphabetically or by how often an entry was chosen before. Either would
//! destroy the most-recent-first contract of a history snapshot, so the
//! adapter pins presentation order and recent-use rotation off.

use crate::history::HistorySnapshot;

/// How the completion facility may order candidates for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOrder {
    /// Present candidates exactly in input order
    Preserve,
    /// Sort candidates lexicographically
    Alphabetical,
    /// Order candidates by past selection frequency
    ByFrequency,
}

/// A fixed candidate list plus the presentation rules the facility must obey
#[derive(Debug, Clone)]
pub struct CandidateSource {
    items: Vec<String>,
    /// Display ordering; [`CandidateOrder::Preserve`] for history sources
    pub order: CandidateOrder,
    /// Whether the facility may rotate recently chosen items to the front
    pub rotate_most_recent: bool,
    /// Whether the final answer must be one of the offered candidates
    pub require_match: bool,
    /// Pre-filled answer offered to the user, if any
    pub default: Option<String>,
}

impl CandidateSource {
    /// Wrap a history snapshot as a candidate source
    ///
    /// The snapshot is already most-recent-first, so ordering is pinned to
    /// [`CandidateOrder::Preserve`] and recent-use rotation is disabled.
    /// Free-text answers outside the list are rejected by the facility.
    pub fn from_history(history: HistorySnapshot) -> Self {
        Self {
            items: history.into_entries(),
            order: CandidateOrder::Preserve,
            rotate_most_recent: false,
            require_match: true,
            default: None,
        }
    }

    /// Candidates in presentation order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
