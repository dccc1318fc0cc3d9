//! Keymaps: chord → command tables with parent fallthrough
//!
//! A keymap distinguishes three states for a chord: bound to a command,
//! explicitly disabled, and absent. Absent chords fall through to the parent
//! keymap; disabled chords do not, because the entry records "no action"
//! and a parent binding cannot shine through.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use super::chord::KeyChord;

/// Commands a chord can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Prompt for a previous input and insert it at the cursor
    InsertFromHistory,
    /// Incremental forward search (a stock host binding)
    SearchForward,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::InsertFromHistory => write!(f, "insert-from-history"),
            Command::SearchForward => write!(f, "search-forward"),
        }
    }
}

/// What a keymap entry holds for a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Chord runs this command
    Command(Command),
    /// Chord does nothing, and parent keymaps are not consulted
    Disabled,
}

/// One keymap, optionally deriving from a parent
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    entries: HashMap<KeyChord, Binding>,
    parent: Option<Box<Keymap>>,
}

impl Keymap {
    /// Create an empty keymap with no parent
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty keymap deriving from `parent`
    pub fn with_parent(parent: Keymap) -> Self {
        Self {
            entries: HashMap::new(),
            parent: Some(Box::new(parent)),
        }
    }

    /// Bind a chord to a command in this keymap
    pub fn bind(&mut self, chord: KeyChord, command: Command) {
        self.entries.insert(chord, Binding::Command(command));
    }

    /// Disable a chord in this keymap
    ///
    /// The chord stops doing anything, including whatever a parent keymap
    /// would have bound it to. Distinct from [`Keymap::remove`].
    pub fn disable(&mut self, chord: KeyChord) {
        self.entries.insert(chord, Binding::Disabled);
    }

    /// Drop this keymap's own entry for a chord, re-exposing the parent's
    pub fn remove(&mut self, chord: KeyChord) {
        self.entries.remove(&chord);
    }

    /// This keymap's own entry for a chord, ignoring parents
    pub fn entry(&self, chord: KeyChord) -> Option<Binding> {
        self.entries.get(&chord).copied()
    }

    /// Resolve a chord to the command it runs, if any
    ///
    /// Walks up the parent chain for absent chords; stops dead at a
    /// [`Binding::Disabled`] entry.
    pub fn resolve(&self, chord: KeyChord) -> Option<Command> {
        match self.entries.get(&chord) {
            Some(Binding::Command(command)) => Some(*command),
            Some(Binding::Disabled) => None,
            None => self.parent.as_ref().and_then(|p| p.resolve(chord)),
        }
    }

    /// Number of entries in this keymap itself
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Identifier naming a keymap in the host environment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct KeymapId(String);

impl KeymapId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KeymapId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for KeymapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The host's named keymaps
///
/// Deferred bind actions receive a mutable reference to this table when
/// their feature loads; looking up an id that was never registered is the
/// configuration error described in `installer`.
#[derive(Debug, Default)]
pub struct KeymapRegistry {
    maps: HashMap<KeymapId, Keymap>,
}

impl KeymapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a keymap under an id
    pub fn insert(&mut self, id: KeymapId, keymap: Keymap) {
        self.maps.insert(id, keymap);
    }

    pub fn get(&self, id: &KeymapId) -> Option<&Keymap> {
        self.maps.get(id)
    }

    pub fn get_mut(&mut self, id: &KeymapId) -> Option<&mut Keymap> {
        self.maps.get_mut(id)
    }

    pub fn contains(&self, id: &KeymapId) -> bool {
        self.maps.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::chord::KeyChord;

    fn alt_r() -> KeyChord {
        KeyChord::alt('r')
    }

    fn alt_s() -> KeyChord {
        KeyChord::alt('s')
    }

    #[test]
    fn test_bind_and_resolve() {
        let mut keymap = Keymap::new();
        keymap.bind(alt_r(), Command::InsertFromHistory);

        assert_eq!(keymap.resolve(alt_r()), Some(Command::InsertFromHistory));
        assert_eq!(keymap.resolve(alt_s()), None);
    }

    #[test]
    fn test_absent_chord_falls_through_to_parent() {
        let mut parent = Keymap::new();
        parent.bind(alt_s(), Command::SearchForward);

        let child = Keymap::with_parent(parent);
        assert_eq!(child.resolve(alt_s()), Some(Command::SearchForward));
    }

    #[test]
    fn test_disabled_chord_blocks_parent() {
        let mut parent = Keymap::new();
        parent.bind(alt_s(), Command::SearchForward);

        let mut child = Keymap::with_parent(parent);
        child.disable(alt_s());

        assert_eq!(child.resolve(alt_s()), None);
        assert_eq!(child.entry(alt_s()), Some(Binding::Disabled));
    }

    #[test]
    fn test_remove_differs_from_disable() {
        let mut parent = Keymap::new();
        parent.bind(alt_s(), Command::SearchForward);

        let mut child = Keymap::with_parent(parent);
        child.disable(alt_s());
        child.remove(alt_s());

        // With the entry gone entirely, the parent binding is visible again
        assert_eq!(child.resolve(alt_s()), Some(Command::SearchForward));
        assert_eq!(child.entry(alt_s()), None);
    }

    #[test]
    fn test_rebinding_overwrites() {
        let mut keymap = Keymap::new();
        keymap.bind(alt_r(), Command::SearchForward);
        keymap.bind(alt_r(), Command::InsertFromHistory);

        assert_eq!(keymap.resolve(alt_r()), Some(Command::InsertFromHistory));
        assert_eq!(keymap.len(), 1);
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = KeymapRegistry::new();
        registry.insert(KeymapId::from("shell"), Keymap::new());

        assert!(registry.contains(&KeymapId::from("shell")));
        assert!(registry.get(&KeymapId::from("repl")).is_none());
        assert!(registry.get_mut(&KeymapId::from("shell")).is_some());
    }
}
