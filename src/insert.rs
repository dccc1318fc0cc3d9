//! The interactive insertion command
//!
//! Resolves the relevant history, offers it through the host's completion
//! prompt, and splices the chosen entry into the current document.

use anyhow::Result;

use crate::candidates::CandidateSource;
use crate::config::Config;
use crate::host::{Document, Host};
use crate::resolver::resolve_history;

/// Label shown by the completion prompt
const PROMPT_LABEL: &str = "Item: ";

/// What one invocation of the command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Exactly one chosen entry was inserted at the cursor
    Inserted,
    /// The user cancelled or confirmed empty input; nothing was inserted
    Cancelled,
}

/// Prompt for a previous input and insert the user's choice at the cursor
///
/// When invoked from inside a prompt session, that session's pre-existing
/// input is cleared once the completion step returns, even when it returns
/// nothing. Cancelling still clears; stale prompt content never survives
/// this command.
///
/// Cancellation is an [`InsertOutcome`], not an error. `Err` only carries
/// failures of the host facilities themselves, unhandled.
pub fn insert_from_history(host: &mut dyn Host, config: &Config) -> Result<InsertOutcome> {
    let ctx = host.context();

    let history = resolve_history(host, config);
    tracing::debug!("offering {} candidate(s) in {} context", history.len(), ctx.kind);

    let source = CandidateSource::from_history(history);
    let choice = host.read_choice(PROMPT_LABEL, &source)?;

    if ctx.in_prompt() {
        host.clear_prompt_input()?;
    }

    match choice {
        Some(item) if !item.is_empty() => {
            privileged_insert(host.document(), &item)?;
            tracing::info!("inserted {} byte(s) from history", item.len());
            Ok(InsertOutcome::Inserted)
        }
        _ => {
            tracing::debug!("selection cancelled, nothing inserted");
            Ok(InsertOutcome::Cancelled)
        }
    }
}

/// Insert text at the cursor even when the position is protected
///
/// Lifts the document's read-only flag for the duration of the insert and
/// restores the previous state on every exit path, including a failing
/// insert.
pub fn privileged_insert(doc: &mut dyn Document, text: &str) -> Result<()> {
    let was_read_only = doc.read_only();
    doc.set_read_only(false);

    let mut doc = scopeguard::guard(doc, move |doc| {
        doc.set_read_only(was_read_only);
    });

    doc.insert_at_cursor(text)
}
