//! Host editor interfaces
//!
//! Everything this extension needs from the editor it runs inside, expressed
//! as traits: reading the active context, reading history sources, driving
//! the interactive completion prompt, and editing the current document. The
//! completion engine and the history stores themselves stay on the host side
//! of this boundary.

use anyhow::Result;

use crate::candidates::CandidateSource;
use crate::context::EditorContext;
use crate::history::RingId;

/// The host editor as seen by this extension
///
/// Cancellation of the completion prompt is data (`Ok(None)`), not an error;
/// `Err` from any method means the host facility itself failed and is
/// propagated out of the extension untouched.
pub trait Host {
    /// Snapshot of the current editing context
    fn context(&self) -> EditorContext;

    /// String representations of previously executed complex commands,
    /// most recent first
    fn command_records(&self) -> Vec<String>;

    /// The history list attached to the currently active prompt session
    ///
    /// The active list can differ between two prompt invocations, so hosts
    /// must answer for "right now" rather than hand out a cached reference.
    /// `None` means the session has no history list.
    fn active_prompt_history(&self) -> Option<Vec<String>>;

    /// Elements of the named history ring, most recent first
    ///
    /// `None` means the ring is not bound in the current environment, which
    /// is distinct from `Some(vec![])` (bound but empty).
    fn ring(&self, id: &RingId) -> Option<Vec<String>>;

    /// Open the interactive completion prompt and await the user's answer
    ///
    /// The facility enforces `source.require_match`; a cancelled session or
    /// empty answer comes back as `Ok(None)`. The session may itself be
    /// nested inside another active prompt session.
    fn read_choice(&mut self, label: &str, source: &CandidateSource) -> Result<Option<String>>;

    /// Erase whatever input the active prompt session currently holds
    fn clear_prompt_input(&mut self) -> Result<()>;

    /// The document the cursor currently lives in
    fn document(&mut self) -> &mut dyn Document;
}

/// Mutable view of the document under the cursor
pub trait Document {
    /// Whether the position under the cursor is protected against edits
    fn read_only(&self) -> bool;

    /// Raise or lower the edit protection flag
    fn set_read_only(&mut self, read_only: bool);

    /// Insert text at the cursor position
    ///
    /// Fails if the position is protected; callers that need to write
    /// regardless lift the flag first (see `insert::privileged_insert`).
    fn insert_at_cursor(&mut self, text: &str) -> Result<()>;
}
