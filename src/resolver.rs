//! Context resolution: which history applies here?
//!
//! Evaluated in strict priority order, first match wins:
//!
//! 1. The previous action repeated a complex command → the command records.
//! 2. An active prompt session → that session's own history list.
//! 3. First configured (context kind → ring) pair whose ring is present.
//! 4. Nothing matched → an empty snapshot.
//!
//! "No history available" is not an error; the prompt simply opens with no
//! candidates.

use crate::config::Config;
use crate::history::HistorySnapshot;
use crate::host::Host;

/// Pick the history sequence relevant to the host's current context
///
/// Rule 2 queries the host for the list that is active *right now*; the
/// active list can change between two prompt invocations, so it is never
/// cached. Rule 3 skips table entries whose ring is declared but absent and
/// keeps scanning.
pub fn resolve_history(host: &dyn Host, config: &Config) -> HistorySnapshot {
    let ctx = host.context();

    if ctx.after_command_repeat {
        tracing::debug!("resolving to complex-command records");
        return HistorySnapshot::new(host.command_records());
    }

    if ctx.in_prompt() {
        tracing::debug!("resolving to the active prompt history");
        return match host.active_prompt_history() {
            Some(entries) => HistorySnapshot::new(entries),
            None => HistorySnapshot::empty(),
        };
    }

    for binding in &config.input_rings {
        if binding.context != ctx.kind {
            continue;
        }
        match host.ring(&binding.ring) {
            Some(entries) => {
                tracing::debug!("resolving to ring {}", binding.ring);
                return HistorySnapshot::new(entries);
            }
            None => {
                tracing::debug!("ring {} not bound, continuing scan", binding.ring);
            }
        }
    }

    HistorySnapshot::empty()
}
