//! One-shot installation of the insertion keybinding
//!
//! For every configured (feature, keymap) pair, arranges (deferred until
//! the feature is available) that the target keymap binds the configured
//! chord to [`Command::InsertFromHistory`] and, when enabled, carries an
//! explicit disabled entry for the companion chord.

use anyhow::{anyhow, Result};

use super::chord::KeyChord;
use super::keymap::{Command, KeymapId, KeymapRegistry};
use crate::config::{companion_chord, Config};
use crate::features::{BindAction, FeatureBus};

/// Register the configured keybindings for deferred installation
///
/// Typically called once at extension load time. Nothing is mutated
/// eagerly for features that have not loaded; each bind action runs when
/// the bus reports its feature available (or, on a legacy bus, on every
/// new context instance). An action that fires against an unregistered
/// keymap id errors out; that is a configuration error the bus hands to
/// the host, not caught here.
pub fn setup_keybindings(
    config: &Config,
    features: &mut FeatureBus,
    keymaps: &mut KeymapRegistry,
) -> Result<()> {
    for spec in &config.keymaps {
        let action = bind_action(
            config.binding,
            config.unbind_companion_key,
            spec.keymap.clone(),
        );

        if features.supports_load_notifications() {
            features.notify_on_load(spec.feature.clone(), keymaps, action)?;
        } else {
            features.on_instance_created(spec.feature.clone(), action);
        }
    }

    Ok(())
}

/// The deferred mutation for one target keymap
fn bind_action(chord: KeyChord, unbind_companion: bool, keymap_id: KeymapId) -> BindAction {
    Box::new(move |keymaps: &mut KeymapRegistry| {
        let keymap = keymaps
            .get_mut(&keymap_id)
            .ok_or_else(|| anyhow!("keymap '{}' is not registered", keymap_id))?;

        keymap.bind(chord, Command::InsertFromHistory);
        if unbind_companion {
            keymap.disable(companion_chord());
        }

        tracing::info!("bound {} to {} in keymap {}", chord, Command::InsertFromHistory, keymap_id);
        Ok(())
    })
}
