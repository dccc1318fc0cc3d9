//! recall - insert a previous input anywhere
//!
//! An editor extension that prompts with the history relevant to the
//! current context (the active prompt session's list, a shell/REPL input
//! ring, or the record of executed complex commands) and inserts the
//! chosen entry at the cursor. A companion installer rebinds a configured
//! chord to the command across the host's keymaps.
//!
//! The host editor is reached exclusively through the traits in [`host`];
//! its completion engine and history stores are consumed, never
//! reimplemented.

pub mod candidates;
pub mod config;
pub mod config_paths;
pub mod context;
pub mod features;
pub mod history;
pub mod host;
pub mod insert;
pub mod keymap;
pub mod resolver;
pub mod tracing;

// Re-export commonly used types
pub use candidates::{CandidateOrder, CandidateSource};
pub use config::{companion_chord, Config};
pub use context::{ContextKind, EditorContext};
pub use features::{FeatureBus, FeatureId};
pub use history::{HistorySnapshot, Ring, RingId};
pub use host::{Document, Host};
pub use insert::{insert_from_history, InsertOutcome};
pub use keymap::{setup_keybindings, KeyChord, Keymap, KeymapId, KeymapRegistry};
pub use resolver::resolve_history;
