//! Key-chords, keymaps, and the keybinding installer
//!
//! Chords are written as strings in configuration (`"alt+r"`) and parsed
//! into [`KeyChord`] values. [`Keymap`] resolves chords to commands with
//! parent fallthrough, and `installer` wires the insertion command into the
//! host's keymaps once their features load.

mod chord;
mod installer;
#[allow(clippy::module_inception)]
mod keymap;

pub use chord::{ChordParseError, Key, KeyChord, Modifiers};
pub use installer::setup_keybindings;
pub use keymap::{Binding, Command, Keymap, KeymapId, KeymapRegistry};
