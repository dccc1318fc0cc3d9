//! User configuration
//!
//! One immutable [`Config`] is built at startup, from built-in defaults or
//! `~/.config/recall/config.yaml`, and passed by reference into the
//! resolver, the insertion command, and the keybinding installer. Nothing
//! reads configuration ambiently after that.
//!
//! ```yaml
//! binding: "alt+r"
//! unbind_companion_key: true
//! input_rings:
//!   - context: shell
//!     ring: shell-input
//! keymaps:
//!   - feature: shell
//!     keymap: shell
//! ```

use std::fmt;

use serde::Deserialize;

use crate::context::ContextKind;
use crate::features::FeatureId;
use crate::history::RingId;
use crate::keymap::{KeyChord, KeymapId};

/// Pairs a context kind with the history ring consulted for it
///
/// The resolver scans these in order; see `resolver::resolve_history`.
#[derive(Debug, Clone, Deserialize)]
pub struct RingBinding {
    pub context: ContextKind,
    pub ring: RingId,
}

/// Names a keymap the installer should touch once its feature loads
#[derive(Debug, Clone, Deserialize)]
pub struct KeymapSpec {
    pub feature: FeatureId,
    pub keymap: KeymapId,
}

/// Immutable extension configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Ordered (context kind → ring) table for the resolver's final rule
    pub input_rings: Vec<RingBinding>,
    /// Keymaps the installer targets, with their gating features
    pub keymaps: Vec<KeymapSpec>,
    /// Chord that triggers the insertion command once installed
    pub binding: KeyChord,
    /// Whether installing the binding also disables the companion chord
    pub unbind_companion_key: bool,
}

/// The companion chord disabled alongside installation
///
/// Bound to forward search in stock host keymaps; disabled (not removed) so
/// the keymap explicitly records "no action" instead of exposing a parent
/// binding.
pub fn companion_chord() -> KeyChord {
    KeyChord::alt('s')
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_rings: default_input_rings(),
            keymaps: default_keymap_specs(),
            binding: KeyChord::alt('r'),
            unbind_companion_key: true,
        }
    }
}

fn default_input_rings() -> Vec<RingBinding> {
    vec![
        RingBinding {
            context: ContextKind::Shell,
            ring: RingId::from("shell-input"),
        },
        RingBinding {
            context: ContextKind::Repl,
            ring: RingId::from("repl-input"),
        },
        RingBinding {
            context: ContextKind::Terminal,
            ring: RingId::from("term-input"),
        },
    ]
}

fn default_keymap_specs() -> Vec<KeymapSpec> {
    vec![
        KeymapSpec {
            feature: FeatureId::from("shell"),
            keymap: KeymapId::from("shell"),
        },
        KeymapSpec {
            feature: FeatureId::from("repl"),
            keymap: KeymapId::from("repl"),
        },
        KeymapSpec {
            feature: FeatureId::from("terminal"),
            keymap: KeymapId::from("terminal"),
        },
    ]
}

/// On-disk shape of the config file; every field optional
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    binding: Option<String>,
    #[serde(default)]
    unbind_companion_key: Option<bool>,
    #[serde(default)]
    input_rings: Option<Vec<RingBinding>>,
    #[serde(default)]
    keymaps: Option<Vec<KeymapSpec>>,
}

impl Config {
    /// Load config from disk, or return defaults if not found
    ///
    /// Unreadable or unparsable content degrades to defaults with a
    /// warning rather than failing startup.
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse a config from YAML; absent fields keep their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let defaults = Self::default();

        let binding = match raw.binding {
            Some(text) => text
                .parse::<KeyChord>()
                .map_err(|e| ConfigError::InvalidBinding(e.to_string()))?,
            None => defaults.binding,
        };

        Ok(Self {
            input_rings: raw.input_rings.unwrap_or(defaults.input_rings),
            keymaps: raw.keymaps.unwrap_or(defaults.keymaps),
            binding,
            unbind_companion_key: raw
                .unbind_companion_key
                .unwrap_or(defaults.unbind_companion_key),
        })
    }
}

/// Errors produced when parsing a config file
#[derive(Debug, Clone)]
pub enum ConfigError {
    Parse(String),
    InvalidBinding(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::InvalidBinding(e) => write!(f, "Invalid binding: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
