//! Key-chord notation: `"alt+r"`, `"ctrl+shift+p"`, `"f5"`
//!
//! Chords appear as strings in user configuration and are parsed once at
//! load time. Parsing is case-insensitive and accepts the common aliases
//! for each modifier.

use std::fmt;
use std::str::FromStr;

/// Modifier keys held as part of a chord
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
        meta: false,
    };

    pub const ALT: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: true,
        meta: false,
    };

    pub fn is_empty(&self) -> bool {
        *self == Modifiers::NONE
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("ctrl");
        }
        if self.shift {
            parts.push("shift");
        }
        if self.alt {
            parts.push("alt");
        }
        if self.meta {
            parts.push("meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// The non-modifier part of a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key, normalized to lowercase
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function key F1..=F24
    F(u8),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Enter => write!(f, "enter"),
            Key::Escape => write!(f, "escape"),
            Key::Tab => write!(f, "tab"),
            Key::Backspace => write!(f, "backspace"),
            Key::Delete => write!(f, "delete"),
            Key::Space => write!(f, "space"),
            Key::Up => write!(f, "up"),
            Key::Down => write!(f, "down"),
            Key::Left => write!(f, "left"),
            Key::Right => write!(f, "right"),
            Key::Home => write!(f, "home"),
            Key::End => write!(f, "end"),
            Key::PageUp => write!(f, "pageup"),
            Key::PageDown => write!(f, "pagedown"),
            Key::F(n) => write!(f, "f{}", n),
        }
    }
}

/// A complete key-chord: modifiers plus one key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub mods: Modifiers,
    pub key: Key,
}

impl KeyChord {
    pub const fn new(mods: Modifiers, key: Key) -> Self {
        Self { mods, key }
    }

    /// Chord for a bare character key
    pub fn char(c: char) -> Self {
        Self::new(Modifiers::NONE, Key::Char(c.to_ascii_lowercase()))
    }

    /// Chord for Alt plus a character key
    pub fn alt(c: char) -> Self {
        Self::new(Modifiers::ALT, Key::Char(c.to_ascii_lowercase()))
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.mods, self.key)
        }
    }
}

/// Error produced when a chord string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordParseError {
    input: String,
    reason: &'static str,
}

impl ChordParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

impl fmt::Display for ChordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid key-chord '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for ChordParseError {}

impl FromStr for KeyChord {
    type Err = ChordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mods = Modifiers::NONE;
        let mut key = None;

        for part in s.split('+') {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "" => return Err(ChordParseError::new(s, "empty chord segment")),
                "ctrl" | "control" => mods.ctrl = true,
                "shift" => mods.shift = true,
                "alt" | "option" | "opt" => mods.alt = true,
                "meta" | "super" | "cmd" | "win" => mods.meta = true,
                _ => {
                    if key.is_some() {
                        return Err(ChordParseError::new(s, "more than one key"));
                    }
                    key = Some(parse_key(&part).ok_or_else(|| {
                        ChordParseError::new(s, "unknown key name")
                    })?);
                }
            }
        }

        let key = key.ok_or_else(|| ChordParseError::new(s, "no key, only modifiers"))?;
        Ok(KeyChord::new(mods, key))
    }
}

fn parse_key(name: &str) -> Option<Key> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(Key::Char(c.to_ascii_lowercase()));
    }

    // Function keys: f1..f24
    if let Some(num) = name.strip_prefix('f') {
        if let Ok(n) = num.parse::<u8>() {
            if (1..=24).contains(&n) {
                return Some(Key::F(n));
            }
        }
    }

    match name {
        "enter" | "return" => Some(Key::Enter),
        "escape" | "esc" => Some(Key::Escape),
        "tab" => Some(Key::Tab),
        "backspace" | "back" => Some(Key::Backspace),
        "delete" | "del" => Some(Key::Delete),
        "space" => Some(Key::Space),
        "up" => Some(Key::Up),
        "down" => Some(Key::Down),
        "left" => Some(Key::Left),
        "right" => Some(Key::Right),
        "home" => Some(Key::Home),
        "end" => Some(Key::End),
        "pageup" | "pgup" => Some(Key::PageUp),
        "pagedown" | "pgdown" | "pgdn" => Some(Key::PageDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_char() {
        let chord: KeyChord = "r".parse().unwrap();
        assert_eq!(chord, KeyChord::char('r'));
        assert!(chord.mods.is_empty());
    }

    #[test]
    fn test_parse_alt_chord() {
        let chord: KeyChord = "alt+r".parse().unwrap();
        assert_eq!(chord, KeyChord::alt('r'));
        assert!(chord.mods.alt);
        assert!(!chord.mods.ctrl);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let chord: KeyChord = "Alt+R".parse().unwrap();
        assert_eq!(chord, KeyChord::alt('r'));
    }

    #[test]
    fn test_parse_modifier_aliases() {
        let a: KeyChord = "option+s".parse().unwrap();
        let b: KeyChord = "alt+s".parse().unwrap();
        assert_eq!(a, b);

        let chord: KeyChord = "super+x".parse().unwrap();
        assert!(chord.mods.meta);
    }

    #[test]
    fn test_parse_multiple_modifiers() {
        let chord: KeyChord = "ctrl+shift+p".parse().unwrap();
        assert!(chord.mods.ctrl);
        assert!(chord.mods.shift);
        assert_eq!(chord.key, Key::Char('p'));
    }

    #[test]
    fn test_parse_named_and_function_keys() {
        assert_eq!("enter".parse::<KeyChord>().unwrap().key, Key::Enter);
        assert_eq!("pgdn".parse::<KeyChord>().unwrap().key, Key::PageDown);
        assert_eq!("f5".parse::<KeyChord>().unwrap().key, Key::F(5));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("".parse::<KeyChord>().is_err());
        assert!("ctrl+".parse::<KeyChord>().is_err());
        assert!("ctrl+alt".parse::<KeyChord>().is_err());
        assert!("a+b".parse::<KeyChord>().is_err());
        assert!("f99".parse::<KeyChord>().is_err());
        assert!("bogus".parse::<KeyChord>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for text in ["alt+r", "ctrl+shift+p", "f5", "space"] {
            let chord: KeyChord = text.parse().unwrap();
            assert_eq!(chord.to_string(), text);
            let again: KeyChord = chord.to_string().parse().unwrap();
            assert_eq!(again, chord);
        }
    }

    #[test]
    fn test_char_keys_normalize_to_lowercase() {
        assert_eq!(KeyChord::char('A'), KeyChord::char('a'));
    }
}
